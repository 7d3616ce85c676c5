use serde::Serialize;
use std::io::Write;

use crate::domain::types::{AccountKind, Amount};
use crate::domain::{Account, AccountState, LedgerError, Outcome};

pub fn write_outcome<W: Write>(writer: &mut W, outcome: &Outcome) -> std::io::Result<()> {
    writeln!(writer, "{}", outcome)
}

pub fn write_rejection<W: Write>(writer: &mut W, error: &LedgerError) -> std::io::Result<()> {
    writeln!(writer, "Error: {}.", error)
}

/// One row of the account summary export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub name: String,
    pub kind: AccountKind,
    /// Rounded to three places; serialized as a decimal string.
    pub balance: Amount,
    pub state: AccountState,
    pub transactions: String,
}

impl SummaryRecord {
    pub fn from_account(account: &Account) -> Self {
        SummaryRecord {
            name: account.name().to_string(),
            kind: account.kind(),
            balance: account.balance().rounded(),
            state: account.state(),
            transactions: account.view().history_list(),
        }
    }
}

pub const SUMMARY_HEADER: [&str; 5] = ["name", "kind", "balance", "state", "transactions"];

pub fn write_summary<W: Write>(
    writer: W,
    records: impl Iterator<Item = SummaryRecord>,
) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(SUMMARY_HEADER)?;

    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
