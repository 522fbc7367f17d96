mod cli;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordtally::engine::{Result, Summary, TallyError};
use wordtally::input::{self, LoadedDocument};

use crate::cli::{format_counts, summary_header, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", "Error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn collect_documents(cli: &Cli) -> Result<Vec<LoadedDocument>> {
    if cli.clipboard {
        return Ok(vec![input::clipboard::load()?]);
    }
    if cli.files.is_empty() {
        return Ok(vec![input::text::load_stdin()?]);
    }
    cli.files
        .iter()
        .map(|path| input::load(path).map_err(TallyError::from))
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.lexer_config();
    let documents = collect_documents(cli)?;
    let mut total = Summary::default();

    if cli.summary {
        println!("{}", summary_header());
    }

    for doc in &documents {
        let output = doc
            .tokenize(&config)
            .map_err(|error| TallyError::lex(&doc.source, error))?;

        if let Some(first) = output.skipped.first() {
            tracing::warn!(
                source = %doc.source,
                skipped = output.skipped.len(),
                first_offset = first.offset,
                "skipped unrecognized bytes"
            );
        }

        let summary = Summary::of(&output);
        if cli.tokens {
            for token in &output.tokens {
                println!("{}", token.text);
            }
        } else {
            println!("{}", format_counts(&summary, &doc.source, cli.summary));
        }
        total.merge(&summary);
    }

    if !cli.tokens && documents.len() > 1 {
        println!("{}", format_counts(&total, "total", cli.summary));
    }
    Ok(())
}
