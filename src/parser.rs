use csv::ReaderBuilder;
use std::io::Read;
use thiserror::Error;

use crate::domain::types::{AccountKind, Amount, Instruction};
use crate::domain::LedgerError;

#[derive(Debug, Error)]
pub enum ParseError {
    /// A ledger condition detected while reading the line (unknown keyword or kind).
    #[error("line {line}: {source}")]
    Rejected {
        line: u64,
        #[source]
        source: LedgerError,
    },

    #[error("line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("line {line}: unreadable record: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// The underlying reader failed. No further lines are read.
    #[error("line {line}: input error: {source}")]
    Io {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reads one instruction per line, tokens separated by spaces.
///
/// A first line holding only an integer is taken as the number of instructions
/// that follow; reading stops once that many have been returned.
pub struct InstructionParser<R: Read> {
    reader: csv::Reader<R>,
    line_number: u64,
    remaining: Option<usize>,
    started: bool,
    failed: bool,
}

impl<R: Read> std::fmt::Debug for InstructionParser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstructionParser")
            .field("line_number", &self.line_number)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<R: Read> InstructionParser<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        InstructionParser {
            reader: csv_reader,
            line_number: 0,
            remaining: None,
            started: false,
            failed: false,
        }
    }

    pub fn next_instruction(&mut self) -> Option<Result<Instruction, ParseError>> {
        loop {
            if self.failed || self.remaining == Some(0) {
                return None;
            }

            let mut record = csv::StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    let line = self.line_number + 1;
                    if e.is_io_error() {
                        self.failed = true;
                        return Some(Err(ParseError::Io { line, source: e }));
                    }
                    return Some(Err(ParseError::Csv { line, source: e }));
                }
            }
            self.line_number = record
                .position()
                .map(|p| p.line())
                .unwrap_or(self.line_number + 1);

            let tokens: Vec<&str> = record.iter().filter(|t| !t.is_empty()).collect();
            if tokens.is_empty() {
                continue;
            }

            let first = !self.started;
            self.started = true;
            if first && tokens.len() == 1 {
                if let Ok(count) = tokens[0].parse::<usize>() {
                    self.remaining = Some(count);
                    continue;
                }
            }

            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
            return Some(parse_tokens(&tokens, self.line_number));
        }
    }
}

impl<R: Read> Iterator for InstructionParser<R> {
    type Item = Result<Instruction, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_instruction()
    }
}

fn parse_tokens(tokens: &[&str], line: u64) -> Result<Instruction, ParseError> {
    let (keyword, args) = match tokens.split_first() {
        Some(split) => split,
        None => {
            return Err(ParseError::Malformed {
                line,
                message: "Empty instruction".to_string(),
            })
        }
    };

    let malformed = |usage: &str| ParseError::Malformed {
        line,
        message: format!("Expected '{}', got '{}'", usage, tokens.join(" ")),
    };

    match *keyword {
        "Create" => {
            let args = match args {
                [prefix, rest @ ..]
                    if rest.len() == 3 && prefix.eq_ignore_ascii_case("account") =>
                {
                    rest
                }
                _ => args,
            };
            let [kind, name, balance] = args else {
                return Err(malformed("Create <kind> <name> <initialBalance>"));
            };
            let kind: AccountKind = kind
                .parse()
                .map_err(|source| ParseError::Rejected { line, source })?;
            Ok(Instruction::Create {
                kind,
                name: name.to_string(),
                initial_balance: parse_amount(balance, line)?,
            })
        }
        "Deposit" => {
            let [name, amount] = args else {
                return Err(malformed("Deposit <name> <amount>"));
            };
            Ok(Instruction::Deposit {
                name: name.to_string(),
                amount: parse_amount(amount, line)?,
            })
        }
        "Withdraw" => {
            let [name, amount] = args else {
                return Err(malformed("Withdraw <name> <amount>"));
            };
            Ok(Instruction::Withdraw {
                name: name.to_string(),
                amount: parse_amount(amount, line)?,
            })
        }
        "Transfer" => {
            let [from, to, amount] = args else {
                return Err(malformed("Transfer <fromName> <toName> <amount>"));
            };
            Ok(Instruction::Transfer {
                from: from.to_string(),
                to: to.to_string(),
                amount: parse_amount(amount, line)?,
            })
        }
        "View" => {
            let [name] = args else {
                return Err(malformed("View <name>"));
            };
            Ok(Instruction::View {
                name: name.to_string(),
            })
        }
        "Deactivate" => {
            let [name] = args else {
                return Err(malformed("Deactivate <name>"));
            };
            Ok(Instruction::Deactivate {
                name: name.to_string(),
            })
        }
        "Activate" => {
            let [name] = args else {
                return Err(malformed("Activate <name>"));
            };
            Ok(Instruction::Activate {
                name: name.to_string(),
            })
        }
        other => Err(ParseError::Rejected {
            line,
            source: LedgerError::InvalidOperation(other.to_string()),
        }),
    }
}

fn parse_amount(token: &str, line: u64) -> Result<Amount, ParseError> {
    Amount::parse(token).map_err(|_| ParseError::Malformed {
        line,
        message: format!("Invalid amount: '{}'", token),
    })
}
