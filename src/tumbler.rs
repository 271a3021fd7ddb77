use std::collections::HashMap;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Dictionary, InputError, Result};

/// Number of digit positions a tumbler serves unless told otherwise.
pub const DEFAULT_MAX_WIDTH: usize = 32;

#[derive(Clone, Debug)]
struct Permutation {
    forward: Vec<char>,
    inverse: HashMap<char, u32>,
}

impl Permutation {
    fn new(forward: Vec<char>) -> Self {
        let inverse = forward
            .iter()
            .enumerate()
            .map(|(digit, &u)| (u, digit as u32))
            .collect();
        Permutation { forward, inverse }
    }

    fn base(&self) -> u32 {
        self.forward.len() as u32
    }
}

/// Positional substitution: the digit at position `i` is written with the symbol it maps to in
/// the `i`th permutation of the dictionary.
///
/// Independent permutations per position hide repeated digits and other simple patterns in the
/// payload. This is an obfuscation, not encryption.
#[derive(Clone, Debug)]
pub struct Tumbler {
    permutations: Vec<Permutation>,
}

impl Tumbler {
    /// Shuffles the dictionary once per position, drawing from `rng`.
    pub fn new<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R, max_width: usize) -> Self {
        let permutations = (0..max_width)
            .map(|_| {
                let mut symbols = dictionary.symbols().to_vec();
                symbols.shuffle(rng);
                Permutation::new(symbols)
            })
            .collect();

        Tumbler { permutations }
    }

    /// The same seed always produces the same table.
    pub fn with_seed(dictionary: &Dictionary, seed: u64, max_width: usize) -> Self {
        Tumbler::new(dictionary, &mut StdRng::seed_from_u64(seed), max_width)
    }

    /// Maps every digit to the symbol at the same index of the dictionary, at every position.
    pub fn identity(dictionary: &Dictionary, max_width: usize) -> Self {
        Tumbler::from_permutations(vec![dictionary.clone(); max_width])
    }

    /// Uses one given permutation per position; the number of permutations is the max width.
    pub fn from_permutations<I>(permutations: I) -> Self
    where
        I: IntoIterator<Item = Dictionary>,
    {
        let permutations = permutations
            .into_iter()
            .map(|dictionary| Permutation::new(dictionary.symbols().to_vec()))
            .collect();

        Tumbler { permutations }
    }

    pub fn max_width(&self) -> usize {
        self.permutations.len()
    }

    fn check_width(&self, len: usize) -> Result<()> {
        if len >= self.max_width() {
            return Err(InputError::TooWide {
                len,
                max_width: self.max_width(),
            }
            .into());
        }
        Ok(())
    }

    pub fn tumble(&self, digits: &[u32]) -> Result<Vec<char>> {
        self.check_width(digits.len())?;

        digits
            .iter()
            .zip(&self.permutations)
            .enumerate()
            .map(|(position, (&digit, permutation))| {
                permutation
                    .forward
                    .get(digit as usize)
                    .copied()
                    .ok_or_else(|| {
                        InputError::DigitOutOfRange {
                            position,
                            digit,
                            base: permutation.base(),
                        }
                        .into()
                    })
            })
            .collect()
    }

    pub fn untumble(&self, symbols: &[char]) -> Result<Vec<u32>> {
        self.check_width(symbols.len())?;

        symbols
            .iter()
            .zip(&self.permutations)
            .enumerate()
            .map(|(position, (&u, permutation))| {
                permutation.inverse.get(&u).copied().ok_or_else(|| {
                    InputError::UnknownSymbol {
                        position,
                        symbol: u.to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }
}
