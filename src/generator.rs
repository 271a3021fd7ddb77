use std::fmt::{self, Display};

use crate::{
    BaseConverter, ChecksumGenerator, Dictionary, Formatter, InputError, Padder, Result, Tumbler,
    DEFAULT_MAX_WIDTH,
};

pub const DEFAULT_SEED: u64 = 24;
pub const DEFAULT_PADDING: usize = 4;

/// Everything that fixes the codes a [`Generator`] produces.
///
/// The seed is a key, not entropy: two generators built from equal configurations produce and
/// accept exactly the same codes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    pub dictionary: Dictionary,
    pub random_seed: u64,
    pub min_padded_length: usize,
    pub separator: String,
    pub max_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dictionary: Dictionary::easy_public(),
            random_seed: DEFAULT_SEED,
            min_padded_length: DEFAULT_PADDING,
            separator: String::new(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl GeneratorConfig {
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_seed(mut self, random_seed: u64) -> Self {
        self.random_seed = random_seed;
        self
    }

    pub fn with_padding(mut self, min_padded_length: usize) -> Self {
        self.min_padded_length = min_padded_length;
        self
    }

    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }
}

/// Turns positive integers into codes and codes back into integers.
///
/// ```
/// use easy_pin::Generator;
///
/// let generator = Generator::default();
/// let code = generator.generate(1337).unwrap();
/// assert_eq!(generator.revert(&code).unwrap(), 1337);
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    base_converter: BaseConverter,
    checksum_generator: ChecksumGenerator,
    padder: Padder,
    tumbler: Tumbler,
    formatter: Formatter,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let GeneratorConfig {
            dictionary,
            random_seed,
            min_padded_length,
            separator,
            max_width,
        } = config;

        if dictionary.symbols().iter().any(|&u| separator.contains(u)) {
            return Err(InputError::SeparatorCollision(separator).into());
        }

        let base = dictionary.base();
        let tumbler = Tumbler::with_seed(&dictionary, random_seed, max_width);

        Generator::from_parts(
            BaseConverter::new(base),
            ChecksumGenerator::new(base),
            Padder::new(min_padded_length),
            tumbler,
            Formatter::new(separator),
        )
    }

    /// Assembles a generator from stages built by the caller, e.g. with an identity tumbler.
    ///
    /// The stages must agree on a base; only the padding is checked against the tumbler here.
    pub fn from_parts(
        base_converter: BaseConverter,
        checksum_generator: ChecksumGenerator,
        padder: Padder,
        tumbler: Tumbler,
        formatter: Formatter,
    ) -> Result<Self> {
        if padder.min_len() >= tumbler.max_width() {
            return Err(InputError::PaddingTooWide {
                padding: padder.min_len(),
                max_width: tumbler.max_width(),
            }
            .into());
        }

        tracing::debug!(
            base = base_converter.base(),
            padding = padder.min_len(),
            max_width = tumbler.max_width(),
            separator = formatter.separator(),
            "built pin generator"
        );

        Ok(Generator {
            base_converter,
            checksum_generator,
            padder,
            tumbler,
            formatter,
        })
    }

    fn symbols(&self, n: i64) -> Result<Vec<char>> {
        if n < 1 {
            return Err(InputError::BelowMinimum {
                value: n,
                minimum: 1,
            }
            .into());
        }

        let digits = self.base_converter.convert(n as u64);
        let digits = self.checksum_generator.checksum(&digits);
        let digits = self.padder.pad(&digits);
        self.tumbler.tumble(&digits)
    }

    pub fn generate(&self, n: i64) -> Result<String> {
        let symbols = self.symbols(n)?;
        Ok(self.formatter.format(&symbols))
    }

    /// Runs the fallible stages now and defers writing the code to `Display`.
    pub fn display(&self, n: i64) -> Result<Code<'_>> {
        Ok(Code {
            symbols: self.symbols(n)?,
            formatter: &self.formatter,
        })
    }

    pub fn revert(&self, code: &str) -> Result<i64> {
        let symbols = self.formatter.unformat(code)?;
        let digits = self.tumbler.untumble(&symbols)?;
        let digits = self.padder.unpad(&digits);

        if let Err(e) = self.checksum_generator.validate(&digits) {
            tracing::trace!(code, error = %e, "rejected code");
            return Err(e);
        }

        let digits = self.checksum_generator.unchecksum(&digits);
        let n = self.base_converter.unconvert(&digits)?;
        if n > i64::MAX as u64 {
            return Err(InputError::Overflow.into());
        }
        Ok(n as i64)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(GeneratorConfig::default()).expect("Default configuration is valid")
    }
}

/// A generated code that writes itself through the generator's formatter.
#[derive(Clone, Debug)]
pub struct Code<'g> {
    symbols: Vec<char>,
    formatter: &'g Formatter,
}

impl<'g> Code<'g> {
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl<'g> Display for Code<'g> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.formatter.format_into(&self.symbols, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, DEFAULT_MAX_WIDTH};

    fn numeric_identity() -> Generator {
        let dictionary = Dictionary::numeric();
        Generator::from_parts(
            BaseConverter::new(dictionary.base()),
            ChecksumGenerator::new(dictionary.base()),
            Padder::new(4),
            Tumbler::identity(&dictionary, DEFAULT_MAX_WIDTH),
            Formatter::default(),
        )
        .unwrap()
    }

    #[test]
    fn identity_pipeline_shows_the_digits() {
        let generator = numeric_identity();

        assert_eq!(generator.generate(1234).unwrap(), "12340");
        assert_eq!(generator.generate(7).unwrap(), "0077");
        assert_eq!(generator.revert("12340").unwrap(), 1234);
        assert_eq!(generator.revert("0077").unwrap(), 7);
    }

    #[test]
    fn raises_if_the_checksum_is_wrong() {
        let generator = numeric_identity();

        assert_eq!(
            generator.revert("12341"),
            Err(Error::InvalidChecksum {
                computed: 0,
                expected: 1
            })
        );
    }

    #[test]
    fn rejects_integers_below_one() {
        let generator = Generator::default();

        assert_eq!(
            generator.generate(0),
            Err(Error::InvalidInput(InputError::BelowMinimum {
                value: 0,
                minimum: 1
            }))
        );
        assert!(generator.generate(-1).unwrap_err().is_invalid_input());
        assert!(generator.generate(i64::MIN).unwrap_err().is_invalid_input());
    }

    #[test]
    fn default_codes_are_padded() {
        let generator = Generator::default();

        for n in 1..24 {
            assert_eq!(generator.generate(n).unwrap().chars().count(), 4);
        }
    }

    #[test]
    fn empty_and_all_padding_codes_are_rejected() {
        let generator = numeric_identity();

        assert_eq!(
            generator.revert(""),
            Err(Error::InvalidInput(InputError::MissingChecksum))
        );
        assert_eq!(
            generator.revert("0000"),
            Err(Error::InvalidInput(InputError::MissingChecksum))
        );
    }

    #[test]
    fn rejects_codes_beyond_the_integer_range() {
        let generator = numeric_identity();

        // 9223372036854775808 is one past i64::MAX; its digit sum is 89.
        assert_eq!(
            generator.revert("92233720368547758089"),
            Err(Error::InvalidInput(InputError::Overflow))
        );
    }

    #[test]
    fn separator_must_not_be_a_symbol() {
        let config = GeneratorConfig::default().with_separator("b");
        assert_eq!(
            Generator::new(config).unwrap_err(),
            Error::InvalidInput(InputError::SeparatorCollision("b".to_string()))
        );
    }

    #[test]
    fn padding_must_fit_the_tumbler() {
        let config = GeneratorConfig::default().with_padding(8).with_max_width(8);
        assert_eq!(
            Generator::new(config).unwrap_err(),
            Error::InvalidInput(InputError::PaddingTooWide {
                padding: 8,
                max_width: 8
            })
        );
    }

    #[test]
    fn display_matches_generate() {
        let generator = Generator::new(GeneratorConfig::default().with_separator("-")).unwrap();
        let code = generator.display(1337331).unwrap();

        assert_eq!(code.to_string(), generator.generate(1337331).unwrap());
        assert_eq!(code.to_string().split('-').count(), code.symbols().len());
    }

    #[test]
    fn seeds_change_the_codes() {
        let a = Generator::new(GeneratorConfig::default().with_seed(1)).unwrap();
        let b = Generator::new(GeneratorConfig::default().with_seed(2)).unwrap();

        let differ = (1..100).any(|n| a.generate(n).unwrap() != b.generate(n).unwrap());
        assert!(differ);
    }
}
