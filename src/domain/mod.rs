pub mod account;
pub mod error;
pub mod fee;
pub mod ledger;
pub mod outcome;
pub mod state;
pub mod types;

pub use account::Account;
pub use error::LedgerError;
pub use ledger::Ledger;
pub use outcome::{AccountView, Outcome};
pub use state::AccountState;
pub use types::{AccountKind, Amount, HistoryEntry, Instruction};
