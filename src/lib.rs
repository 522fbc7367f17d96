//! wordtally: tokenize free-form text into words, numbers, decimals and
//! clock times, and count them.

pub mod engine;
pub mod input;
pub mod lexing;

pub use engine::{word_count, LexError, LexerConfig, Mode};
pub use lexing::{tokenize, tokenize_with_config, Token, TokenKind, Tokenization};
