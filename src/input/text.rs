use super::{LoadError, LoadedDocument};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load a plain text file as raw bytes. No encoding is assumed; the lexer
/// decides what to do with bytes it does not recognize.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        origin: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded text file");

    Ok(LoadedDocument::new(bytes, format!("text:{}", path.display())))
}

/// Read all of standard input. Blocks until the stream is closed.
pub fn load_stdin() -> Result<LoadedDocument, LoadError> {
    load_reader(io::stdin().lock(), "stdin")
}

/// Read `reader` to the end, labelling the document with `source`.
pub fn load_reader<R: Read>(mut reader: R, source: &str) -> Result<LoadedDocument, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source_err| LoadError::Io {
            origin: source.to_string(),
            source: source_err,
        })?;
    tracing::debug!(source, bytes = bytes.len(), "loaded stream");

    Ok(LoadedDocument::new(bytes, source))
}
