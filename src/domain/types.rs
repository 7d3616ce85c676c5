use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::LedgerError;

/// Digits after the decimal point in every rendered amount.
pub const DISPLAY_PRECISION: u32 = 3;

/// Exact decimal money value. Arithmetic is never rounded; only `Display` is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Largest balance or amount the ledger accepts: 25 integer digits, so every
    /// value still fits at 3 decimal places.
    pub const MAX: Amount = Amount(Decimal::from_parts(
        268_435_455,
        1_042_612_833,
        542_101_086,
        false,
        DISPLAY_PRECISION,
    ));

    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    pub fn parse(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Self::new(decimal))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    pub fn is_within_range(&self) -> bool {
        self.0.abs() <= Self::MAX.0
    }

    /// Sum that stays within [`Amount::MAX`].
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0
            .checked_add(rhs.0)
            .map(Amount)
            .filter(Amount::is_within_range)
    }

    /// Rounded to [`DISPLAY_PRECISION`] places, midpoints away from zero, with
    /// trailing zeros kept (`1.5` becomes `1.500`).
    pub fn rounded(self) -> Amount {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_PRECISION);
        Amount(rounded)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded().0)
    }
}

/// Account kind; fixed at creation and selects the fee rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountKind {
    Savings,
    Checking,
    Business,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
            AccountKind::Business => "Business",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(AccountKind::Savings),
            "checking" => Ok(AccountKind::Checking),
            "business" => Ok(AccountKind::Business),
            _ => Err(LedgerError::InvalidAccountKind(s.to_string())),
        }
    }
}

/// One record in an account's transaction history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    InitialDeposit(Amount),
    Deposit(Amount),
    Withdrawal(Amount),
    Transfer(Amount),
}

impl HistoryEntry {
    pub fn amount(&self) -> Amount {
        match self {
            HistoryEntry::InitialDeposit(a)
            | HistoryEntry::Deposit(a)
            | HistoryEntry::Withdrawal(a)
            | HistoryEntry::Transfer(a) => *a,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HistoryEntry::InitialDeposit(_) => "Initial Deposit",
            HistoryEntry::Deposit(_) => "Deposit",
            HistoryEntry::Withdrawal(_) => "Withdrawal",
            HistoryEntry::Transfer(_) => "Transfer",
        };
        write!(f, "{} ${}", label, self.amount())
    }
}

/// A parsed, validated request against the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Create {
        kind: AccountKind,
        name: String,
        initial_balance: Amount,
    },
    Deposit {
        name: String,
        amount: Amount,
    },
    Withdraw {
        name: String,
        amount: Amount,
    },
    Transfer {
        from: String,
        to: String,
        amount: Amount,
    },
    View {
        name: String,
    },
    Deactivate {
        name: String,
    },
    Activate {
        name: String,
    },
}
