use crate::engine::config::{LexerConfig, Mode};
use crate::engine::error::LexError;

use super::class::{classify, ByteClass};
use super::normalize::normalize_span;
use super::state::{transition, Action, Classification, StepContext};
use super::token::Token;

/// Suffixes that stay attached to a preceding number or clock time.
const MERIDIEM_SUFFIXES: &[&str] = &["a", "p", "am", "pm"];

fn is_meridiem(letters: &str) -> bool {
    MERIDIEM_SUFFIXES.contains(&letters)
}

/// A byte ignored in lenient mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedByte {
    pub offset: usize,
    pub byte: u8,
}

/// Output of one lexer run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenization {
    pub tokens: Vec<Token>,
    /// Unrecognized bytes skipped in lenient mode, in input order.
    pub skipped: Vec<SkippedByte>,
}

impl Tokenization {
    /// Token texts in input order.
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.tokens.into_iter().map(|t| t.text).collect()
    }
}

/// Boundary decision deferred while the letters after a number are read.
#[derive(Debug)]
struct PendingSuffix {
    /// Where the numeric token ends if the letters turn out to be a new word.
    boundary: usize,
    /// Offset of the first letter, once one has been seen.
    letters_start: Option<usize>,
    letters: String,
}

/// Single-pass lexer over one fully buffered input.
pub struct Lexer<'a> {
    input: &'a [u8],
    mode: Mode,
    state: Classification,
    index: usize,
    word_index: Option<usize>,
    hyphen_cached: bool,
    after_digit: bool,
    suffix: Option<PendingSuffix>,
    output: Tokenization,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8], config: &LexerConfig) -> Self {
        Self {
            input,
            mode: config.mode,
            state: Classification::Start,
            index: 0,
            word_index: None,
            hyphen_cached: false,
            after_digit: false,
            suffix: None,
            output: Tokenization::default(),
        }
    }

    /// Consume the whole input and return the tokens.
    pub fn run(mut self) -> Result<Tokenization, LexError> {
        while self.index < self.input.len() {
            let byte = self.input[self.index];
            self.step(byte)?;
            self.index += 1;
        }
        self.finish();
        Ok(self.output)
    }

    fn step(&mut self, byte: u8) -> Result<(), LexError> {
        let Some(class) = classify(byte) else {
            return match self.mode {
                Mode::Strict => Err(LexError::InvalidByte {
                    byte,
                    offset: self.index,
                }),
                Mode::Lenient => {
                    self.output.skipped.push(SkippedByte {
                        offset: self.index,
                        byte,
                    });
                    self.break_at_skipped();
                    Ok(())
                }
            };
        };

        if let Some(pending) = self.suffix.as_mut() {
            if class == ByteClass::Letter {
                pending.letters_start.get_or_insert(self.index);
                pending.letters.push(char::from(byte));
                self.after_digit = false;
                return Ok(());
            }
            self.resolve_suffix(self.index);
        }

        let ctx = StepContext {
            hyphen_cached: self.hyphen_cached,
            after_digit: self.after_digit,
        };
        let t = transition(self.state, class, ctx);

        match t.action {
            Action::Stay => {}
            Action::Open => self.word_index = Some(self.index),
            Action::Close => self.close_at(self.index, false),
            Action::CloseAndOpen => {
                self.close_at(self.index, false);
                self.word_index = Some(self.index);
            }
            Action::Discard => self.word_index = None,
            Action::Lookahead => {
                let mut pending = PendingSuffix {
                    boundary: self.index,
                    letters_start: None,
                    letters: String::new(),
                };
                if class == ByteClass::Letter {
                    pending.letters_start = Some(self.index);
                    pending.letters.push(char::from(byte));
                }
                self.suffix = Some(pending);
            }
        }

        self.state = t.next;
        self.hyphen_cached = self.state == Classification::InWord && class == ByteClass::Hyphen;
        self.after_digit = class == ByteClass::Digit;
        Ok(())
    }

    /// A skipped byte is a boundary: settle any suffix, close the token
    /// before the byte and return to `Start`.
    fn break_at_skipped(&mut self) {
        self.resolve_suffix(self.index);
        match self.state {
            Classification::Start => {}
            Classification::AfterDot => self.word_index = None,
            _ => self.close_at(self.index, false),
        }
        self.state = Classification::Start;
        self.hyphen_cached = false;
        self.after_digit = false;
    }

    /// Settle a deferred suffix now that a non-letter (or the end) at `end` was reached.
    fn resolve_suffix(&mut self, end: usize) {
        let Some(pending) = self.suffix.take() else {
            return;
        };

        match pending.letters_start {
            None => {
                self.close_at(pending.boundary, false);
                self.state = Classification::Start;
            }
            Some(_) if is_meridiem(&pending.letters) => {
                self.close_at(end, true);
                self.state = Classification::Start;
            }
            Some(letters_start) => {
                // Not a suffix: the number ends before the letters, which begin a word.
                self.close_at(pending.boundary, false);
                self.word_index = Some(letters_start);
                self.state = Classification::InWord;
            }
        }
        self.hyphen_cached = false;
    }

    fn close_at(&mut self, end: usize, meridiem: bool) {
        let Some(start) = self.word_index.take() else {
            return;
        };
        let text = normalize_span(&self.input[start..end]);
        if !text.is_empty() {
            self.output.tokens.push(Token::new(text, start, meridiem));
        }
    }

    /// End-of-input step: flush whatever token is still open.
    fn finish(&mut self) {
        let end = self.input.len();
        self.resolve_suffix(end);
        match self.state {
            Classification::Start => {}
            Classification::AfterDot => self.word_index = None,
            _ => self.close_at(end, false),
        }
        self.state = Classification::Start;
    }
}

/// Tokenize `input` under `config`, reporting skipped bytes in lenient mode.
pub fn tokenize_with_config(
    input: &[u8],
    config: &LexerConfig,
) -> Result<Tokenization, LexError> {
    let output = Lexer::new(input, config).run()?;
    tracing::debug!(
        mode = %config.mode,
        bytes = input.len(),
        tokens = output.tokens.len(),
        skipped = output.skipped.len(),
        "tokenized input"
    );
    Ok(output)
}

/// Tokenize `input` into normalized token strings.
pub fn tokenize(input: &[u8], mode: Mode) -> Result<Vec<String>, LexError> {
    tokenize_with_config(input, &LexerConfig::new(mode)).map(Tokenization::into_texts)
}
