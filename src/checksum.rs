use crate::{Error, InputError, Result};

/// Appends, validates and strips a trailing checksum digit equal to the digit sum modulo the
/// base.
///
/// Any single substituted digit is caught. Several substitutions whose changes cancel out modulo
/// the base are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumGenerator {
    base: u32,
}

impl ChecksumGenerator {
    /// # Panics
    ///
    /// Panics if `base` is below 2.
    pub fn new(base: u32) -> Self {
        assert!(base >= 2, "base must be at least 2, got {}", base);
        ChecksumGenerator { base }
    }

    fn sum(&self, digits: &[u32]) -> u32 {
        let base = u64::from(self.base);
        let sum = digits
            .iter()
            .fold(0u64, |acc, &digit| (acc + u64::from(digit)) % base);
        sum as u32
    }

    pub fn checksum(&self, digits: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(digits.len() + 1);
        result.extend_from_slice(digits);
        result.push(self.sum(digits));
        result
    }

    /// Strips the checksum digit without looking at it.
    pub fn unchecksum(&self, digits: &[u32]) -> Vec<u32> {
        match digits.split_last() {
            Some((_, payload)) => payload.to_vec(),
            None => Vec::new(),
        }
    }

    pub fn validate(&self, digits: &[u32]) -> Result<()> {
        let (&expected, payload) = digits.split_last().ok_or(InputError::MissingChecksum)?;
        let computed = self.sum(payload);

        if computed != expected {
            return Err(Error::InvalidChecksum { computed, expected });
        }

        Ok(())
    }
}
