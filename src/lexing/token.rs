/// Broad category of an emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Integer,
    Decimal,
    /// Clock time such as `11:20` or `11:20 am`.
    Time,
}

impl TokenKind {
    /// Infer the kind from normalized token text. `meridiem` is set when a
    /// meridiem suffix was merged into the token.
    pub fn of(text: &str, meridiem: bool) -> Self {
        let starts_with_letter = text
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_alphabetic());

        if starts_with_letter {
            TokenKind::Word
        } else if meridiem || text.contains(':') {
            TokenKind::Time
        } else if text.contains('.') {
            TokenKind::Decimal
        } else {
            TokenKind::Integer
        }
    }
}

/// A normalized token and where its span started in the input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Byte offset of the first byte of the token's span.
    pub offset: usize,
}

impl Token {
    pub fn new(text: String, offset: usize, meridiem: bool) -> Self {
        let kind = TokenKind::of(&text, meridiem);
        Self { text, kind, offset }
    }
}
