//! Short, human-friendly codes for positive integers.
//!
//! A code is built in five steps: the integer is written in the base of a [`Dictionary`], a
//! checksum digit is appended, the digits are left-padded with zeroes, each digit is replaced by a
//! symbol through a per-position permutation of the dictionary, and the symbols are joined.
//! [`Generator::revert`] undoes the steps in reverse order and rejects codes whose checksum does
//! not match.
//!
//! ```
//! use easy_pin::{Dictionary, Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::default()
//!     .with_dictionary(Dictionary::numeric())
//!     .with_padding(6)
//!     .with_separator("-");
//! let generator = Generator::new(config).unwrap();
//!
//! let code = generator.generate(42).unwrap();
//! assert_eq!(code.len(), 11);
//! assert_eq!(generator.revert(&code).unwrap(), 42);
//! ```

mod checksum;
mod convert;
mod dictionary;
mod error;
mod format;
mod generator;
mod padding;
mod tumbler;

pub use checksum::*;
pub use convert::*;
pub use dictionary::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use padding::*;
pub use tumbler::*;
