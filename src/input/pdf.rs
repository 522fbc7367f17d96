use super::{LoadError, LoadedDocument};
use std::fs;
use std::path::Path;

/// Load text from a PDF file using the pdf-extract crate.
///
/// The whole file is read into memory and its text layer extracted in page
/// order.
///
/// Extracted text is handed to the lexer as UTF-8 bytes, so ligatures and
/// other non-ASCII glyphs are subject to the configured mode: strict mode
/// rejects them, lenient mode treats each one as a word boundary.
///
/// Errors: `FileNotFound` when `path` does not exist, `PdfParse` for read or
/// extraction failures.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;
    tracing::debug!(path = %path.display(), chars = text.len(), "extracted PDF text");

    Ok(LoadedDocument::new(text, format!("pdf:{}", path.display())))
}
