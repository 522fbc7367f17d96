use thiserror::Error;

use crate::input::LoadError;

/// Result type for wordtally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Tokenization failure. Only raised in strict mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A byte outside the recognized classes, including ones that have no
    /// meaning in the current lexer state.
    #[error("invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::InvalidByte { offset, .. } => *offset,
        }
    }
}

/// Top-level error for the wordtally front end.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("{origin}: {error}")]
    Lex { origin: String, error: LexError },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl TallyError {
    pub fn lex(origin: impl Into<String>, error: LexError) -> Self {
        TallyError::Lex {
            origin: origin.into(),
            error,
        }
    }
}
