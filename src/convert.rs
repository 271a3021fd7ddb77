use crate::{InputError, Result};

/// Bijection between non-negative integers and big-endian digit sequences in a fixed base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseConverter {
    base: u32,
}

impl BaseConverter {
    /// # Panics
    ///
    /// Panics if `base` is below 2.
    pub fn new(base: u32) -> Self {
        assert!(base >= 2, "base must be at least 2, got {}", base);
        BaseConverter { base }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Zero converts to the empty sequence; the padder is responsible for any visible zeroes.
    pub fn convert(&self, mut n: u64) -> Vec<u32> {
        let base = u64::from(self.base);
        let mut digits = Vec::new();

        while n != 0 {
            digits.push((n % base) as u32);
            n /= base;
        }

        digits.reverse();
        digits
    }

    /// Fails with [`InputError::Overflow`] rather than wrapping when the digits describe a value
    /// larger than `u64::MAX`.
    pub fn unconvert(&self, digits: &[u32]) -> Result<u64> {
        let base = u64::from(self.base);
        digits.iter().try_fold(0u64, |n, &digit| {
            n.checked_mul(base)
                .and_then(|n| n.checked_add(u64::from(digit)))
                .ok_or_else(|| InputError::Overflow.into())
        })
    }
}
