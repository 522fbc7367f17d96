pub mod config;
pub mod count;
pub mod error;

pub use config::{LexerConfig, Mode};
pub use count::{word_count, Summary};
pub use error::{LexError, Result, TallyError};
