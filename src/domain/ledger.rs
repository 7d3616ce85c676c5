use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::account::Account;
use crate::domain::error::{LedgerError, Result};
use crate::domain::outcome::Outcome;
use crate::domain::types::{AccountKind, Amount, HistoryEntry, Instruction};

/// Name-keyed registry of accounts. The only place accounts are created or looked up.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Account> {
        self.accounts
            .get(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_string()))
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_string()))
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    /// All accounts ordered by name.
    pub fn accounts_by_name(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.name().cmp(b.name()));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all balances, or `None` if it does not fit in a `Decimal`. Drops by
    /// the fee on each transfer.
    pub fn total_balance(&self) -> Option<Amount> {
        self.accounts
            .values()
            .try_fold(Decimal::ZERO, |total, account| {
                total.checked_add(account.balance().0)
            })
            .map(Amount::new)
    }

    pub fn process(&mut self, instruction: Instruction) -> Result<Outcome> {
        match instruction {
            Instruction::Create {
                kind,
                name,
                initial_balance,
            } => self.create(name, kind, initial_balance),
            Instruction::Deposit { name, amount } => self.lookup_mut(&name)?.deposit(amount),
            Instruction::Withdraw { name, amount } => self.lookup_mut(&name)?.withdraw(amount),
            Instruction::Transfer { from, to, amount } => self.transfer(&from, &to, amount),
            Instruction::View { name } => Ok(Outcome::Viewed(self.lookup(&name)?.view())),
            Instruction::Deactivate { name } => self.lookup_mut(&name)?.deactivate(),
            Instruction::Activate { name } => self.lookup_mut(&name)?.activate(),
        }
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        kind: AccountKind,
        initial_balance: Amount,
    ) -> Result<Outcome> {
        let name = name.into();
        let slot = match self.accounts.entry(name) {
            Entry::Occupied(existing) => {
                return Err(LedgerError::DuplicateAccount(existing.key().clone()))
            }
            Entry::Vacant(slot) => slot,
        };
        let account = Account::new(slot.key().clone(), kind, initial_balance)?;
        debug!(account = %account.name(), %kind, balance = %initial_balance, "account created");

        let account = slot.insert(account);
        Ok(Outcome::Created {
            kind,
            name: account.name().to_string(),
            balance: account.balance(),
        })
    }

    /// Debits `amount` from `from` and credits `amount - fee` to `to`, fee taken at the
    /// payer's rate. Both sides are validated before either is mutated.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Amount) -> Result<Outcome> {
        let payer = self.lookup(from)?;
        let payee = self.lookup(to)?;
        let charge = payer.quote(amount)?;
        if from == to {
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }
        payee.check_credit(charge.net)?;

        let payer = self.lookup_mut(from)?;
        payer.debit(&charge, HistoryEntry::Transfer(amount));
        let balance = payer.balance();

        self.lookup_mut(to)?.credit(charge.net)?;
        debug!(
            from,
            to,
            gross = %charge.gross,
            fee = %charge.fee,
            "transfer applied"
        );

        Ok(Outcome::Transferred {
            from: from.to_string(),
            to: to.to_string(),
            charge,
            balance,
        })
    }
}
