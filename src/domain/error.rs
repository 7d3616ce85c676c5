//! Error types for ledger operations

use thiserror::Error;

use crate::domain::types::Amount;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// A rejected ledger request. Every variant leaves the ledger unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    #[error("Account {0} does not exist")]
    AccountNotFound(String),

    /// Carries the rejected kind token.
    #[error("Invalid account type")]
    InvalidAccountKind(String),

    #[error("Insufficient funds for {0}")]
    InsufficientFunds(String),

    #[error("Account {0} is inactive")]
    AccountInactive(String),

    #[error("Account {0} is already activated")]
    AlreadyActive(String),

    #[error("Account {0} is already deactivated")]
    AlreadyInactive(String),

    /// Carries the unrecognized instruction keyword.
    #[error("Invalid operation")]
    InvalidOperation(String),

    /// Negative amount on a create, deposit, withdrawal or transfer.
    #[error("Amount ${amount} is not valid for {account}")]
    InvalidAmount { account: String, amount: Amount },

    #[error("Account {0} cannot transfer to itself")]
    SelfTransfer(String),

    /// The amount, or the balance it would produce, is above `Amount::MAX`.
    #[error("Amount for {0} exceeds the supported range")]
    AmountOverflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_report_wording() {
        assert_eq!(
            LedgerError::DuplicateAccount("Bob".into()).to_string(),
            "Account Bob already exists"
        );
        assert_eq!(
            LedgerError::AccountNotFound("Ghost".into()).to_string(),
            "Account Ghost does not exist"
        );
        assert_eq!(
            LedgerError::InvalidAccountKind("Credit".into()).to_string(),
            "Invalid account type"
        );
        assert_eq!(
            LedgerError::AccountInactive("Alice".into()).to_string(),
            "Account Alice is inactive"
        );
        assert_eq!(
            LedgerError::AlreadyActive("Alice".into()).to_string(),
            "Account Alice is already activated"
        );
        assert_eq!(
            LedgerError::AlreadyInactive("Alice".into()).to_string(),
            "Account Alice is already deactivated"
        );
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = LedgerError::InvalidAmount {
            account: "Alice".into(),
            amount: Amount::parse("-5").expect("failed to parse amount"),
        };
        assert_eq!(err.to_string(), "Amount $-5.000 is not valid for Alice");
    }

    #[test]
    fn test_overflow_message_omits_amount() {
        assert_eq!(
            LedgerError::AmountOverflow("Alice".into()).to_string(),
            "Amount for Alice exceeds the supported range"
        );
    }
}
