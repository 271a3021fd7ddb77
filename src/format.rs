use std::fmt::{self, Write};

use crate::{InputError, Result};

/// Joins symbols into a code and splits codes back into symbols.
///
/// With an empty separator every character is a symbol. Otherwise the code is split on the
/// separator and each piece must be exactly one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formatter {
    separator: String,
}

impl Formatter {
    pub fn new<S: Into<String>>(separator: S) -> Self {
        Formatter {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format(&self, symbols: &[char]) -> String {
        let mut buf = String::with_capacity(symbols.len() * (1 + self.separator.len()));
        self.format_into(symbols, &mut buf)
            .expect("Cannot fail to format into a string");
        buf
    }

    pub fn format_into<W: Write>(&self, symbols: &[char], w: &mut W) -> fmt::Result {
        for (idx, &u) in symbols.iter().enumerate() {
            if idx > 0 {
                w.write_str(&self.separator)?;
            }
            w.write_char(u)?;
        }
        Ok(())
    }

    pub fn unformat(&self, code: &str) -> Result<Vec<char>> {
        if self.separator.is_empty() {
            return Ok(code.chars().collect());
        }

        if code.is_empty() {
            return Ok(Vec::new());
        }

        code.split(self.separator.as_str())
            .enumerate()
            .map(|(position, piece)| {
                let mut chars = piece.chars();
                match (chars.next(), chars.next()) {
                    (Some(u), None) => Ok(u),
                    _ => Err(InputError::UnknownSymbol {
                        position,
                        symbol: piece.to_string(),
                    }
                    .into()),
                }
            })
            .collect()
    }
}
