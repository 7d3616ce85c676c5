//! Per-kind transaction fees.
//!
//! The fee is taken out of what the receiving side gets: the payer is debited the
//! gross amount, the withdrawer or recipient ends up with `gross - fee`.

use rust_decimal::Decimal;

use crate::domain::types::{AccountKind, Amount};

/// Fee rate as a fraction of the gross amount.
pub fn rate(kind: AccountKind) -> Decimal {
    match kind {
        AccountKind::Savings => Decimal::new(15, 3),
        AccountKind::Checking => Decimal::new(20, 3),
        AccountKind::Business => Decimal::new(25, 3),
    }
}

/// Fee rate in percent, one decimal place (`1.5`, `2.0`, `2.5`).
pub fn percent(kind: AccountKind) -> Decimal {
    (rate(kind) * Decimal::ONE_HUNDRED).round_dp(1)
}

pub fn fee(kind: AccountKind, amount: Amount) -> Amount {
    Amount::new(amount.0 * rate(kind))
}

/// Breakdown of a fee-bearing debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    pub kind: AccountKind,
    pub gross: Amount,
    pub fee: Amount,
    pub net: Amount,
}

impl Charge {
    pub fn compute(kind: AccountKind, gross: Amount) -> Self {
        let fee = fee(kind, gross);
        Charge {
            kind,
            gross,
            fee,
            net: gross - fee,
        }
    }

    pub fn percent(&self) -> Decimal {
        percent(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).expect("failed to parse amount")
    }

    #[test]
    fn test_fee_rates_per_kind() {
        assert_eq!(fee(AccountKind::Savings, amount("100")), amount("1.5"));
        assert_eq!(fee(AccountKind::Checking, amount("100")), amount("2"));
        assert_eq!(fee(AccountKind::Business, amount("100")), amount("2.5"));
    }

    #[test]
    fn test_fee_is_exact() {
        // 33.333 * 0.025 = 0.833325, no rounding before display
        assert_eq!(
            fee(AccountKind::Business, amount("33.333")),
            amount("0.833325")
        );
    }

    #[test]
    fn test_fee_on_largest_decimal_stays_below_amount() {
        let huge = Amount::new(Decimal::MAX);
        let charge = Charge::compute(AccountKind::Business, huge);
        assert!(charge.fee < huge);
        assert!(charge.net < huge);
    }

    #[test]
    fn test_fee_on_zero() {
        assert!(fee(AccountKind::Savings, Amount::ZERO).is_zero());
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format!("{:.1}", percent(AccountKind::Savings)), "1.5");
        assert_eq!(format!("{:.1}", percent(AccountKind::Checking)), "2.0");
        assert_eq!(format!("{:.1}", percent(AccountKind::Business)), "2.5");
    }

    #[test]
    fn test_charge_net_is_gross_minus_fee() {
        let charge = Charge::compute(AccountKind::Savings, amount("50"));
        assert_eq!(charge.fee, amount("0.75"));
        assert_eq!(charge.net, amount("49.25"));
        assert_eq!(charge.fee.checked_add(charge.net), Some(charge.gross));
    }
}
