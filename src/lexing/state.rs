use super::class::ByteClass;

/// Lexer classification states. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    Start,
    InWord,
    InNumber,
    /// Digits followed by a dot.
    InDecimal,
    /// Digits, a colon, then (usually) more digits.
    InTime,
    /// A dot seen outside a word: either a decimal lead-in or bare punctuation.
    AfterDot,
}

/// What happens to the token in progress when a byte is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the token boundaries untouched.
    Stay,
    /// Start a token at the current byte.
    Open,
    /// Emit the token ending just before the current byte.
    Close,
    /// Emit the token ending just before the current byte and start a new one on it.
    CloseAndOpen,
    /// Drop the token in progress without emitting it.
    Discard,
    /// Defer the boundary decision until the following alphabetic run is known.
    Lookahead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Classification,
    pub action: Action,
}

impl Transition {
    const fn new(next: Classification, action: Action) -> Self {
        Self { next, action }
    }
}

/// Facts about the bytes already consumed that some transitions depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepContext {
    /// The word in progress ends with a hyphen that may be a line continuation.
    pub hyphen_cached: bool,
    /// The previous recognized byte was a digit.
    pub after_digit: bool,
}

/// The transition table. Total over every `(state, class)` pair.
pub fn transition(state: Classification, class: ByteClass, ctx: StepContext) -> Transition {
    use Action::*;
    use ByteClass::*;
    use Classification::*;

    match (state, class) {
        (Start, Digit) => Transition::new(InNumber, Open),
        (Start, Letter) => Transition::new(InWord, Open),
        (Start, Dot) => Transition::new(AfterDot, Open),
        (Start, _) => Transition::new(Start, Stay),

        (InWord, Letter) | (InWord, Hyphen) => Transition::new(InWord, Stay),
        (InWord, Newline) if ctx.hyphen_cached => Transition::new(InWord, Stay),
        (InWord, Dot) | (InWord, Space) => Transition::new(Start, Close),

        (InNumber, Digit) | (InTime, Digit) => Transition::new(state, Stay),
        (InNumber, Letter) | (InTime, Letter) => Transition::new(state, Lookahead),
        (InNumber, Dot) => Transition::new(InDecimal, Stay),
        (InNumber, Colon) => Transition::new(InTime, Stay),
        (InNumber, Space) | (InNumber, Hyphen) => Transition::new(Start, Close),

        (InDecimal, Digit) => Transition::new(InNumber, Stay),
        (InDecimal, Space) => Transition::new(Start, Close),

        (InTime, Space) if ctx.after_digit => Transition::new(InTime, Lookahead),
        (InTime, Space) => Transition::new(Start, Close),

        (AfterDot, Digit) => Transition::new(InNumber, Stay),
        (AfterDot, Letter) => Transition::new(InWord, Open),
        (AfterDot, Space) => Transition::new(Start, Discard),

        _ => restart(state, class, ctx),
    }
}

/// Close whatever is in progress and handle `class` as if from `Start`.
fn restart(state: Classification, class: ByteClass, ctx: StepContext) -> Transition {
    let fresh = transition(Classification::Start, class, ctx);
    let holds_token = state != Classification::AfterDot;
    let action = match (fresh.action, holds_token) {
        (Action::Open, true) => Action::CloseAndOpen,
        (Action::Open, false) => Action::Open,
        (_, true) => Action::Close,
        (_, false) => Action::Discard,
    };
    Transition::new(fresh.next, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Action::*;
    use ByteClass::*;
    use Classification::*;

    fn step(state: Classification, class: ByteClass) -> (Classification, Action) {
        let t = transition(state, class, StepContext::default());
        (t.next, t.action)
    }

    #[test]
    fn test_start_opens_tokens() {
        assert_eq!(step(Start, Digit), (InNumber, Open));
        assert_eq!(step(Start, Letter), (InWord, Open));
        assert_eq!(step(Start, Dot), (AfterDot, Open));
    }

    #[test]
    fn test_start_ignores_separators() {
        for class in [Colon, Space, Hyphen, Newline] {
            assert_eq!(step(Start, class), (Start, Stay));
        }
    }

    #[test]
    fn test_word_closes_on_dot_and_space() {
        assert_eq!(step(InWord, Dot), (Start, Close));
        assert_eq!(step(InWord, Space), (Start, Close));
    }

    #[test]
    fn test_word_newline_depends_on_hyphen_cache() {
        assert_eq!(step(InWord, Newline), (Start, Close));
        let cached = StepContext {
            hyphen_cached: true,
            ..StepContext::default()
        };
        let t = transition(InWord, Newline, cached);
        assert_eq!((t.next, t.action), (InWord, Stay));
    }

    #[test]
    fn test_word_followed_by_digit_closes_and_reopens() {
        assert_eq!(step(InWord, Digit), (InNumber, CloseAndOpen));
    }

    #[test]
    fn test_number_transitions() {
        assert_eq!(step(InNumber, Digit), (InNumber, Stay));
        assert_eq!(step(InNumber, Dot), (InDecimal, Stay));
        assert_eq!(step(InNumber, Colon), (InTime, Stay));
        assert_eq!(step(InNumber, Hyphen), (Start, Close));
        assert_eq!(step(InNumber, Letter), (InNumber, Lookahead));
    }

    #[test]
    fn test_decimal_resumes_number_on_digit() {
        assert_eq!(step(InDecimal, Digit), (InNumber, Stay));
        assert_eq!(step(InDecimal, Letter), (InWord, CloseAndOpen));
        assert_eq!(step(InDecimal, Dot), (AfterDot, CloseAndOpen));
    }

    #[test]
    fn test_time_space_lookahead_needs_minutes() {
        assert_eq!(step(InTime, Space), (Start, Close));
        let after_digit = StepContext {
            after_digit: true,
            ..StepContext::default()
        };
        let t = transition(InTime, Space, after_digit);
        assert_eq!((t.next, t.action), (InTime, Lookahead));
    }

    #[test]
    fn test_after_dot_never_emits_bare_dot() {
        assert_eq!(step(AfterDot, Digit), (InNumber, Stay));
        assert_eq!(step(AfterDot, Letter), (InWord, Open));
        assert_eq!(step(AfterDot, Space), (Start, Discard));
        assert_eq!(step(AfterDot, Colon), (Start, Discard));
        assert_eq!(step(AfterDot, Dot), (AfterDot, Open));
    }

    #[test]
    fn test_table_is_total() {
        let states = [Start, InWord, InNumber, InDecimal, InTime, AfterDot];
        let classes = [Digit, Letter, Dot, Colon, Space, Hyphen, Newline];
        for state in states {
            for class in classes {
                for hyphen_cached in [false, true] {
                    for after_digit in [false, true] {
                        let ctx = StepContext {
                            hyphen_cached,
                            after_digit,
                        };
                        // Must not recurse forever or panic.
                        let _ = transition(state, class, ctx);
                    }
                }
            }
        }
    }
}
