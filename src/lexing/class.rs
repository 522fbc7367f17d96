/// Byte classes the lexer reacts to. Anything else is unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Digit,
    Letter,
    Dot,
    Colon,
    Space,
    Hyphen,
    Newline,
}

/// Classify a single input byte; `None` for bytes outside every class.
pub fn classify(byte: u8) -> Option<ByteClass> {
    match byte {
        b'0'..=b'9' => Some(ByteClass::Digit),
        b'a'..=b'z' | b'A'..=b'Z' => Some(ByteClass::Letter),
        b'.' => Some(ByteClass::Dot),
        b':' => Some(ByteClass::Colon),
        b' ' => Some(ByteClass::Space),
        b'-' => Some(ByteClass::Hyphen),
        b'\n' => Some(ByteClass::Newline),
        _ => None,
    }
}

pub fn is_recognized(byte: u8) -> bool {
    classify(byte).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_letters_and_digits() {
        assert_eq!(classify(b'a'), Some(ByteClass::Letter));
        assert_eq!(classify(b'Z'), Some(ByteClass::Letter));
        assert_eq!(classify(b'0'), Some(ByteClass::Digit));
        assert_eq!(classify(b'9'), Some(ByteClass::Digit));
    }

    #[test]
    fn test_classify_punctuation() {
        assert_eq!(classify(b'.'), Some(ByteClass::Dot));
        assert_eq!(classify(b':'), Some(ByteClass::Colon));
        assert_eq!(classify(b' '), Some(ByteClass::Space));
        assert_eq!(classify(b'-'), Some(ByteClass::Hyphen));
        assert_eq!(classify(b'\n'), Some(ByteClass::Newline));
    }

    #[test]
    fn test_classify_rejects_other_ascii() {
        // Tabs and carriage returns are not whitespace here.
        for byte in [b'\t', b'\r', b'(', b',', b'!', b'?', b'_', b'\''] {
            assert_eq!(classify(byte), None, "byte {:?}", byte as char);
        }
    }

    #[test]
    fn test_classify_rejects_non_ascii() {
        assert!(!is_recognized(0xC3));
        assert!(!is_recognized(0xFF));
        assert!(!is_recognized(0x00));
    }
}
