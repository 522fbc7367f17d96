use super::{LoadError, LoadedDocument};

/// Load the current text contents of the system clipboard.
///
/// Fails with `Clipboard` when no clipboard is available (e.g. a headless
/// session) or when it holds no text.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    tracing::debug!(bytes = text.len(), "loaded clipboard text");

    Ok(LoadedDocument::new(text, "clipboard"))
}
