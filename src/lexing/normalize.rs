/// Materialize a closed span into token text.
///
/// Every hyphen immediately followed by a newline is removed together with
/// the newline, rejoining a word wrapped across lines. Then a single trailing
/// dot and any dangling trailing hyphens are stripped.
pub fn normalize_span(span: &[u8]) -> String {
    let mut bytes = span.iter().copied().peekable();
    let mut text = String::with_capacity(span.len());

    while let Some(byte) = bytes.next() {
        if byte == b'-' && bytes.peek() == Some(&b'\n') {
            bytes.next();
            continue;
        }
        // Spans only hold recognized bytes, which are all ASCII.
        text.push(char::from(byte));
    }

    if text.ends_with('.') {
        text.pop();
    }
    let trimmed = text.trim_end_matches('-').len();
    text.truncate(trimmed);
    text
}
