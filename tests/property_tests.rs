//! Property-based tests for ledger invariants
//!
//! - Balances never go negative
//! - Rejected withdrawals and transfers leave balances and history untouched
//! - Transfers move `amount` out of the payer and `amount - fee` into the recipient
//! - Inactive accounts never pay out

use proptest::prelude::*;
use rust_decimal::Decimal;
use tiered_ledger::domain::fee;
use tiered_ledger::domain::{AccountKind, Amount, Instruction, Ledger, LedgerError};

const NAMES: [&str; 4] = ["alice", "bob", "carol", "dave"];

/// Amounts with three decimals, up to 10,000.000
fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0i64..10_000_000i64).prop_map(|millis| Amount::new(Decimal::new(millis, 3)))
}

fn kind_strategy() -> impl Strategy<Value = AccountKind> {
    prop_oneof![
        Just(AccountKind::Savings),
        Just(AccountKind::Checking),
        Just(AccountKind::Business),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn instruction_strategy() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        (kind_strategy(), name_strategy(), amount_strategy()).prop_map(
            |(kind, name, initial_balance)| Instruction::Create {
                kind,
                name,
                initial_balance,
            }
        ),
        (name_strategy(), amount_strategy())
            .prop_map(|(name, amount)| Instruction::Deposit { name, amount }),
        (name_strategy(), amount_strategy())
            .prop_map(|(name, amount)| Instruction::Withdraw { name, amount }),
        (name_strategy(), name_strategy(), amount_strategy())
            .prop_map(|(from, to, amount)| Instruction::Transfer { from, to, amount }),
        name_strategy().prop_map(|name| Instruction::View { name }),
        name_strategy().prop_map(|name| Instruction::Deactivate { name }),
        name_strategy().prop_map(|name| Instruction::Activate { name }),
    ]
}

fn script_strategy() -> impl Strategy<Value = Vec<Instruction>> {
    prop::collection::vec(instruction_strategy(), 1..80)
}

fn funded_ledger(kind: AccountKind, payer_balance: Amount) -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .create("payer", kind, payer_balance)
        .expect("payer creation should succeed");
    ledger
        .create("payee", AccountKind::Checking, Amount::ZERO)
        .expect("payee creation should succeed");
    ledger
}

proptest! {
    #[test]
    fn prop_balances_never_negative(script in script_strategy()) {
        let mut ledger = Ledger::new();
        for instruction in script {
            let _ = ledger.process(instruction);
            for account in ledger.accounts().values() {
                prop_assert!(!account.balance().is_negative());
            }
        }
    }

    #[test]
    fn prop_rejections_leave_state_unchanged(script in script_strategy()) {
        let mut ledger = Ledger::new();
        for instruction in script {
            let before: Vec<_> = ledger
                .accounts_by_name()
                .into_iter()
                .cloned()
                .collect();
            if ledger.process(instruction).is_err() {
                let after: Vec<_> = ledger
                    .accounts_by_name()
                    .into_iter()
                    .cloned()
                    .collect();
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_fee_is_exact_rate(kind in kind_strategy(), amount in amount_strategy()) {
        let expected = match kind {
            AccountKind::Savings => amount.0 * Decimal::new(15, 3),
            AccountKind::Checking => amount.0 * Decimal::new(2, 2),
            AccountKind::Business => amount.0 * Decimal::new(25, 3),
        };
        prop_assert_eq!(fee::fee(kind, amount).0, expected);
        prop_assert_eq!(fee::fee(kind, amount), fee::fee(kind, amount));
    }

    #[test]
    fn prop_transfer_debits_gross_credits_net(
        kind in kind_strategy(),
        balance in amount_strategy(),
        amount in amount_strategy(),
    ) {
        let mut ledger = funded_ledger(kind, balance);
        let total_before = ledger.total_balance().expect("total fits");
        let result = ledger.transfer("payer", "payee", amount);

        let payer = ledger.lookup("payer").expect("payer exists").balance();
        let payee = ledger.lookup("payee").expect("payee exists").balance();
        if amount <= balance {
            prop_assert!(result.is_ok());
            let fee = fee::fee(kind, amount);
            prop_assert_eq!(payer, balance - amount);
            prop_assert_eq!(payee, amount - fee);
            prop_assert_eq!(ledger.total_balance(), Some(total_before - fee));
        } else {
            prop_assert_eq!(result, Err(LedgerError::InsufficientFunds("payer".into())));
            prop_assert_eq!(payer, balance);
            prop_assert!(payee.is_zero());
        }
    }

    #[test]
    fn prop_inactive_account_never_pays_out(
        kind in kind_strategy(),
        balance in amount_strategy(),
        amount in amount_strategy(),
    ) {
        let mut ledger = funded_ledger(kind, balance);
        ledger
            .process(Instruction::Deactivate { name: "payer".into() })
            .expect("deactivate should succeed");

        prop_assert_eq!(
            ledger.process(Instruction::Withdraw { name: "payer".into(), amount }),
            Err(LedgerError::AccountInactive("payer".into()))
        );
        prop_assert_eq!(
            ledger.transfer("payer", "payee", amount),
            Err(LedgerError::AccountInactive("payer".into()))
        );
        prop_assert_eq!(ledger.lookup("payer").expect("payer exists").balance(), balance);

        prop_assert!(ledger.transfer("payee", "payer", Amount::ZERO).is_ok());
        let deposit_result = ledger.process(Instruction::Deposit { name: "payer".into(), amount });
        prop_assert!(deposit_result.is_ok());
    }
}
