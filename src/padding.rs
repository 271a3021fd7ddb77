/// Left-pads digit sequences with zero digits up to a minimum length.
///
/// `unpad` strips every leading zero, so a payload that genuinely starts with a zero digit loses
/// it too. Sequences produced by [`BaseConverter`](crate::BaseConverter) never start with zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padder {
    min_len: usize,
}

impl Padder {
    pub fn new(min_len: usize) -> Self {
        Padder { min_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn pad(&self, digits: &[u32]) -> Vec<u32> {
        let padding = self.min_len.saturating_sub(digits.len());
        let mut result = vec![0; padding];
        result.extend_from_slice(digits);
        result
    }

    pub fn unpad(&self, digits: &[u32]) -> Vec<u32> {
        let start = digits
            .iter()
            .position(|&digit| digit != 0)
            .unwrap_or(digits.len());
        digits[start..].to_vec()
    }
}
