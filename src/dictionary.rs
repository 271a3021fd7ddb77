use std::{
    fmt::{self, Write},
    str::FromStr,
};

use crate::{InputError, Result};

/// Human-safe alphabet.
///
/// Leaves out `i`, `l`, `o`, `s`, `0`, `1` and `5`, which are easily misread, and `m`, which is
/// easily misheard next to `n`. Leaves out the vowels `a`, `e`, `u` and the letter `f` so that
/// generated codes do not spell common profanity.
pub const EASY_PUBLIC: &str = "bcdghjknpqrtvwxyz2346789";

/// Plain decimal digits.
pub const NUMERIC: &str = "0123456789";

/// An ordered set of unique symbols. The number of symbols is the numeric base of every other
/// pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Dictionary {
    symbols: Vec<char>,
}

impl Dictionary {
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.len() < 2 {
            return Err(InputError::DictionaryTooSmall(symbols.len()).into());
        }

        for (idx, &u) in symbols.iter().enumerate() {
            if symbols[..idx].contains(&u) {
                return Err(InputError::DuplicateSymbol(u).into());
            }
        }

        Ok(Dictionary { symbols })
    }

    pub fn easy_public() -> Self {
        Dictionary {
            symbols: EASY_PUBLIC.chars().collect(),
        }
    }

    pub fn numeric() -> Self {
        Dictionary {
            symbols: NUMERIC.chars().collect(),
        }
    }

    pub fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a dictionary holds at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, u: char) -> bool {
        self.symbols.contains(&u)
    }

    /// Digit value of a symbol in dictionary order, before any tumbling.
    pub fn position(&self, u: char) -> Option<u32> {
        self.symbols.iter().position(|&x| x == u).map(|idx| idx as u32)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::easy_public()
    }
}

impl FromStr for Dictionary {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Dictionary::new(s.chars())
    }
}

impl TryFrom<String> for Dictionary {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Dictionary> for String {
    fn from(dictionary: Dictionary) -> Self {
        dictionary.symbols.into_iter().collect()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &u in &self.symbols {
            f.write_char(u)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn builtin_dictionaries() {
        assert_eq!(Dictionary::easy_public().base(), 24);
        assert_eq!(Dictionary::numeric().base(), 10);

        // The builtins bypass validation, so hold them to it here.
        assert!(EASY_PUBLIC.parse::<Dictionary>().is_ok());
        assert!(NUMERIC.parse::<Dictionary>().is_ok());
    }

    #[test]
    fn easy_public_excludes_ambiguous_symbols() {
        for u in "ilos015maefu".chars() {
            assert!(!Dictionary::easy_public().contains(u), "{:?}", u);
        }
    }

    #[test]
    fn rejects_small_dictionaries() {
        assert_eq!(
            "x".parse::<Dictionary>(),
            Err(Error::InvalidInput(InputError::DictionaryTooSmall(1)))
        );
        assert!("".parse::<Dictionary>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn rejects_duplicate_symbols() {
        assert_eq!(
            "abca".parse::<Dictionary>(),
            Err(Error::InvalidInput(InputError::DuplicateSymbol('a')))
        );
    }

    #[test]
    fn position_follows_dictionary_order() {
        let dictionary: Dictionary = "xyz".parse().unwrap();
        assert_eq!(dictionary.position('x'), Some(0));
        assert_eq!(dictionary.position('z'), Some(2));
        assert_eq!(dictionary.position('a'), None);
        assert_eq!(dictionary.to_string(), "xyz");
    }
}
