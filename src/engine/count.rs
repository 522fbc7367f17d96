use crate::engine::config::{LexerConfig, Mode};
use crate::engine::error::LexError;
use crate::lexing::{tokenize_with_config, TokenKind, Tokenization};

/// Number of tokens in `input`.
pub fn word_count(input: &[u8], mode: Mode) -> Result<usize, LexError> {
    tokenize_with_config(input, &LexerConfig::new(mode)).map(|output| output.tokens.len())
}

/// Per-kind tally of one tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub words: usize,
    pub integers: usize,
    pub decimals: usize,
    pub times: usize,
    /// Bytes skipped in lenient mode.
    pub skipped: usize,
}

impl Summary {
    pub fn of(output: &Tokenization) -> Self {
        let mut summary = Summary {
            skipped: output.skipped.len(),
            ..Summary::default()
        };
        for token in &output.tokens {
            match token.kind {
                TokenKind::Word => summary.words += 1,
                TokenKind::Integer => summary.integers += 1,
                TokenKind::Decimal => summary.decimals += 1,
                TokenKind::Time => summary.times += 1,
            }
        }
        summary
    }

    /// Total token count; the word count of the input.
    pub fn total(&self) -> usize {
        self.words + self.integers + self.decimals + self.times
    }

    /// Accumulate another summary, e.g. across several input files.
    pub fn merge(&mut self, other: &Summary) {
        self.words += other.words;
        self.integers += other.integers;
        self.decimals += other.decimals;
        self.times += other.times;
        self.skipped += other.skipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_matches_token_list() {
        let text = b" Hello World 100-20. in-\nteresting 11.2 at 11:20 am";
        assert_eq!(word_count(text, Mode::Strict), Ok(8));
    }

    #[test]
    fn test_word_count_empty() {
        assert_eq!(word_count(b"", Mode::Strict), Ok(0));
        assert_eq!(word_count(b"", Mode::Lenient), Ok(0));
    }

    #[test]
    fn test_word_count_strict_error() {
        assert!(word_count(b"hello, world", Mode::Strict).is_err());
        assert_eq!(word_count(b"hello, world", Mode::Lenient), Ok(2));
    }

    #[test]
    fn test_summary_by_kind() {
        let output = tokenize_with_config(
            b"Meet at 11:20 am, bring 2 pens and 1.5 litres!",
            &LexerConfig::lenient(),
        )
        .unwrap();
        let summary = Summary::of(&output);
        assert_eq!(summary.words, 6);
        assert_eq!(summary.integers, 1);
        assert_eq!(summary.decimals, 1);
        assert_eq!(summary.times, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.total(), output.tokens.len());
    }

    #[test]
    fn test_summary_merge() {
        let mut total = Summary {
            words: 2,
            skipped: 1,
            ..Summary::default()
        };
        total.merge(&Summary {
            words: 1,
            times: 3,
            ..Summary::default()
        });
        assert_eq!(total.words, 3);
        assert_eq!(total.times, 3);
        assert_eq!(total.skipped, 1);
        assert_eq!(total.total(), 6);
    }
}
