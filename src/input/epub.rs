use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from an EPUB file using the epub crate.
///
/// Chapters are read in spine order, their markup stripped, and the results
/// joined with blank lines so that no word spans a chapter boundary.
/// Chapters that cannot be selected or decoded are skipped.
///
/// Errors: `FileNotFound` when `path` does not exist, `EpubParse` when the
/// archive cannot be opened or lists no chapters.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut content = String::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        let Some((chapter_content, _mime)) = doc.get_current_str() else {
            continue;
        };

        let plain_text = extract_plain_text(&chapter_content);
        if plain_text.is_empty() {
            continue;
        }
        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str(&plain_text);
    }
    tracing::debug!(
        path = %path.display(),
        chapters = num_chapters,
        chars = content.len(),
        "extracted EPUB text"
    );

    // A book with no text is a valid, empty input.
    Ok(LoadedDocument::new(content, format!("epub:{}", path.display())))
}

/// Strip tags from chapter HTML. Each tag acts as a line break so that block
/// elements do not glue neighbouring words together.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                result.push('\n');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::Mode;
    use crate::lexing::tokenize;

    #[test]
    fn test_epub_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/path/book.epub"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_epub_parse_error_display() {
        let err = LoadError::EpubParse("Invalid EPUB structure".to_string());
        assert!(matches!(&err, LoadError::EpubParse(msg) if msg.contains("Invalid")));
        assert_eq!(err.to_string(), "EPUB parse error: Invalid EPUB structure");
    }

    #[test]
    fn test_extract_plain_text() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let result = extract_plain_text(html);
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_extract_plain_text_separates_blocks() {
        let html = "<p>first</p><p>second</p>";
        let result = extract_plain_text(html);
        assert_eq!(result, "first\nsecond");
        assert_eq!(
            tokenize(result.as_bytes(), Mode::Strict).unwrap(),
            vec!["first", "second"]
        );
    }
}
