pub mod class;
pub mod lexer;
pub mod normalize;
pub mod state;
pub mod token;

pub use lexer::{tokenize, tokenize_with_config, Lexer, SkippedByte, Tokenization};
pub use state::Classification;
pub use token::{Token, TokenKind};
