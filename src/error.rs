use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure surfaced by `generate` and `revert`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// `computed` is the checksum recomputed over the payload; `expected` is the trailing digit
    /// the code carried.
    #[error("invalid checksum: computed {computed}, expected {expected}")]
    InvalidChecksum { computed: u32, expected: u32 },
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    pub fn is_invalid_checksum(&self) -> bool {
        matches!(self, Error::InvalidChecksum { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{value} is below the minimum of {minimum}")]
    BelowMinimum { value: i64, minimum: i64 },

    #[error("digit {digit} at position {position} is outside 0..{base}")]
    DigitOutOfRange {
        position: usize,
        digit: u32,
        base: u32,
    },

    #[error("symbol {symbol:?} at position {position} is not part of the dictionary")]
    UnknownSymbol { position: usize, symbol: String },

    #[error("sequence of length {len} does not fit a maximum width of {max_width}")]
    TooWide { len: usize, max_width: usize },

    #[error("a dictionary needs at least 2 symbols, got {0}")]
    DictionaryTooSmall(usize),

    #[error("symbol {0:?} appears more than once in the dictionary")]
    DuplicateSymbol(char),

    #[error("code carries no checksum digit")]
    MissingChecksum,

    #[error("decoded value does not fit the native integer range")]
    Overflow,

    #[error("padding to {padding} digits does not fit a maximum width of {max_width}")]
    PaddingTooWide { padding: usize, max_width: usize },

    #[error("separator {0:?} contains a dictionary symbol")]
    SeparatorCollision(String),
}
