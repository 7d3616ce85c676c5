use std::io::{self, Read, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::Ledger;
use crate::parser::{InstructionParser, ParseError};
use crate::writer::{write_outcome, write_rejection};

/// Counts per instruction fate over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    pub applied: usize,
    pub rejected: usize,
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read input")]
    Input(#[source] ParseError),

    #[error("failed to write report")]
    Output(#[from] io::Error),
}

/// Feeds every parsed instruction to the ledger and writes one report line each.
///
/// Malformed lines produce no report line; they are logged and counted as skipped.
/// A failing reader stops the run with [`DispatchError::Input`].
pub fn dispatch<R: Read, W: Write>(
    ledger: &mut Ledger,
    parser: InstructionParser<R>,
    out: &mut W,
) -> Result<DispatchStats, DispatchError> {
    let mut stats = DispatchStats::default();

    for result in parser {
        match result {
            Ok(instruction) => match ledger.process(instruction) {
                Ok(outcome) => {
                    write_outcome(out, &outcome)?;
                    stats.applied += 1;
                }
                Err(e) => {
                    debug!(error = %e, "instruction rejected");
                    write_rejection(out, &e)?;
                    stats.rejected += 1;
                }
            },
            Err(ParseError::Rejected { line, source }) => {
                debug!(line, error = ?source, "instruction rejected");
                write_rejection(out, &source)?;
                stats.rejected += 1;
            }
            Err(e @ ParseError::Io { .. }) => return Err(DispatchError::Input(e)),
            Err(e) => {
                warn!(error = %e, "skipping line");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}
