//! Command line arguments and report formatting for the wordtally binary.

use std::path::PathBuf;

use clap::Parser;
use wordtally::engine::{LexerConfig, Mode, Summary};

/// wordtally - count the words, numbers and clock times in text
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to read (.pdf and .epub are extracted first); reads stdin when none are given
    pub files: Vec<PathBuf>,

    /// Read the system clipboard instead of files
    #[arg(long, conflicts_with = "files")]
    pub clipboard: bool,

    /// What to do with bytes other than letters, digits, space, '.', ':', '-' and newline
    #[arg(long, env = "WORDTALLY_MODE", default_value_t = Mode::Lenient)]
    pub mode: Mode,

    /// Shorthand for --mode strict
    #[arg(short, long)]
    pub strict: bool,

    /// Print tokens one per line instead of counts
    #[arg(short, long, conflicts_with = "summary")]
    pub tokens: bool,

    /// Break counts down by token kind
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Effective mode: `--strict` wins over `--mode` and `WORDTALLY_MODE`.
    pub fn mode(&self) -> Mode {
        if self.strict {
            Mode::Strict
        } else {
            self.mode
        }
    }

    /// Lexer configuration for the effective mode.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::new(self.mode())
    }
}

/// One report line, `wc` style: count first, then the label.
pub fn format_counts(summary: &Summary, label: &str, detailed: bool) -> String {
    if detailed {
        format!(
            "{:>8} {:>8} {:>8} {:>8} {:>8} {}",
            summary.total(),
            summary.words,
            summary.integers,
            summary.decimals,
            summary.times,
            label
        )
    } else {
        format!("{:>8} {}", summary.total(), label)
    }
}

/// Column header printed above `--summary` lines.
pub fn summary_header() -> String {
    format!(
        "{:>8} {:>8} {:>8} {:>8} {:>8} source",
        "total", "words", "integers", "decimals", "times"
    )
}
