// Configuration for the wordtally lexer and command line front end.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Policy for bytes outside the recognized character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Abort on the first unrecognized byte; no partial token list.
    Strict,
    /// Skip unrecognized bytes and keep going.
    #[default]
    Lenient,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected 'strict' or 'lenient')")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "lenient" => Ok(Mode::Lenient),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => write!(f, "strict"),
            Mode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Lexer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexerConfig {
    /// Unrecognized-byte policy (default lenient)
    pub mode: Mode,
}

impl LexerConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }
}
