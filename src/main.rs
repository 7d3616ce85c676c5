use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tiered_ledger::config::{Cli, Config};
use tiered_ledger::dispatcher::dispatch;
use tiered_ledger::domain::Ledger;
use tiered_ledger::logging;
use tiered_ledger::parser::InstructionParser;
use tiered_ledger::writer::{write_summary, SummaryRecord};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    logging::init(&config.logging);

    let reader: Box<dyn Read> = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let parser = InstructionParser::new(reader);

    let mut ledger = Ledger::new();
    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());

    let stats = dispatch(&mut ledger, parser, &mut handle)?;
    handle.flush().context("failed to write report")?;
    info!(
        applied = stats.applied,
        rejected = stats.rejected,
        skipped = stats.skipped,
        accounts = ledger.len(),
        "script processed"
    );

    if let Some(path) = &config.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        let records = ledger
            .accounts_by_name()
            .into_iter()
            .map(SummaryRecord::from_account);
        write_summary(BufWriter::new(file), records)
            .with_context(|| format!("failed to write summary to '{}'", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}
