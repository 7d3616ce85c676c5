use std::fmt;

use crate::domain::fee::Charge;
use crate::domain::state::AccountState;
use crate::domain::types::{AccountKind, Amount, HistoryEntry};

/// Read-only snapshot of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub name: String,
    pub kind: AccountKind,
    pub balance: Amount,
    pub state: AccountState,
    pub history: Vec<HistoryEntry>,
}

impl AccountView {
    /// History rendered as `[Initial Deposit $100.000, Withdrawal $50.000]`.
    pub fn history_list(&self) -> String {
        let entries: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        format!("[{}]", entries.join(", "))
    }
}

impl fmt::Display for AccountView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'s Account: Type: {}, Balance: ${}, State: {}, Transactions: {}.",
            self.name,
            self.kind,
            self.balance,
            self.state,
            self.history_list()
        )
    }
}

/// Result of an accepted instruction; `Display` renders the report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        kind: AccountKind,
        name: String,
        balance: Amount,
    },
    Deposited {
        name: String,
        amount: Amount,
        balance: Amount,
    },
    Withdrew {
        name: String,
        charge: Charge,
        balance: Amount,
    },
    Transferred {
        from: String,
        to: String,
        charge: Charge,
        balance: Amount,
    },
    Viewed(AccountView),
    Activated {
        name: String,
    },
    Deactivated {
        name: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created {
                kind,
                name,
                balance,
            } => write!(
                f,
                "A new {} account created for {} with an initial balance of ${}.",
                kind, name, balance
            ),
            Outcome::Deposited {
                name,
                amount,
                balance,
            } => write!(
                f,
                "{} successfully deposited ${}. New Balance: ${}.",
                name, amount, balance
            ),
            Outcome::Withdrew {
                name,
                charge,
                balance,
            } => write!(
                f,
                "{} successfully withdrew ${}. New Balance: ${}. Transaction Fee: ${} ({:.1}%) in the system.",
                name,
                charge.net,
                balance,
                charge.fee,
                charge.percent()
            ),
            Outcome::Transferred {
                from,
                to,
                charge,
                balance,
            } => write!(
                f,
                "{} successfully transferred ${} to {}. New Balance: ${}. Transaction Fee: ${} ({:.1}%) in the system.",
                from,
                charge.net,
                to,
                balance,
                charge.fee,
                charge.percent()
            ),
            Outcome::Viewed(view) => fmt::Display::fmt(view, f),
            Outcome::Activated { name } => write!(f, "{}'s account is now activated.", name),
            Outcome::Deactivated { name } => write!(f, "{}'s account is now deactivated.", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).expect("failed to parse amount")
    }

    #[test]
    fn test_created_line() {
        let outcome = Outcome::Created {
            kind: AccountKind::Savings,
            name: "Alice".into(),
            balance: amount("100"),
        };
        assert_eq!(
            outcome.to_string(),
            "A new Savings account created for Alice with an initial balance of $100.000."
        );
    }

    #[test]
    fn test_withdrew_line() {
        let outcome = Outcome::Withdrew {
            name: "Alice".into(),
            charge: Charge::compute(AccountKind::Savings, amount("50")),
            balance: amount("50"),
        };
        assert_eq!(
            outcome.to_string(),
            "Alice successfully withdrew $49.250. New Balance: $50.000. \
             Transaction Fee: $0.750 (1.5%) in the system."
        );
    }

    #[test]
    fn test_view_line_with_empty_history() {
        let view = AccountView {
            name: "Bob".into(),
            kind: AccountKind::Business,
            balance: Amount::ZERO,
            state: AccountState::Inactive,
            history: vec![],
        };
        assert_eq!(
            view.to_string(),
            "Bob's Account: Type: Business, Balance: $0.000, State: Inactive, Transactions: []."
        );
    }
}
