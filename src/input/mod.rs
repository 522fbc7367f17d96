use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::config::LexerConfig;
use crate::engine::error::LexError;
use crate::lexing::{tokenize_with_config, Tokenization};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error reading {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
}

/// Raw text of one input, ready for the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub bytes: Vec<u8>,
    /// Where the bytes came from, e.g. `text:notes.txt` or `stdin`.
    pub source: String,
}

impl LoadedDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, source: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            source: source.into(),
        }
    }

    pub fn tokenize(&self, config: &LexerConfig) -> Result<Tokenization, LexError> {
        tokenize_with_config(&self.bytes, config)
    }
}

/// Load a file, choosing the loader from its extension.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;
