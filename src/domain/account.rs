use crate::domain::error::{LedgerError, Result};
use crate::domain::fee::Charge;
use crate::domain::outcome::{AccountView, Outcome};
use crate::domain::state::{AccountState, Transition};
use crate::domain::types::{AccountKind, Amount, HistoryEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    kind: AccountKind,
    balance: Amount,
    state: AccountState,
    history: Vec<HistoryEntry>,
}

impl Account {
    /// Opens an active account whose history starts with the initial deposit.
    pub fn new(
        name: impl Into<String>,
        kind: AccountKind,
        initial_balance: Amount,
    ) -> Result<Self> {
        let name = name.into();
        if !initial_balance.is_within_range() {
            return Err(LedgerError::AmountOverflow(name));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidAmount {
                account: name,
                amount: initial_balance,
            });
        }
        Ok(Account {
            name,
            kind,
            balance: initial_balance,
            state: AccountState::Active,
            history: vec![HistoryEntry::InitialDeposit(initial_balance)],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<Outcome> {
        self.check_amount(amount)?;
        self.balance = self.credited_balance(amount)?;
        self.history.push(HistoryEntry::Deposit(amount));
        Ok(Outcome::Deposited {
            name: self.name.clone(),
            amount,
            balance: self.balance,
        })
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<Outcome> {
        let charge = self.quote(amount)?;
        self.debit(&charge, HistoryEntry::Withdrawal(amount));
        Ok(Outcome::Withdrew {
            name: self.name.clone(),
            charge,
            balance: self.balance,
        })
    }

    /// Validates an outgoing debit without touching the account.
    ///
    /// Checks, in order: the account is active, the amount is in range and not
    /// negative, and the balance covers the gross amount.
    pub fn quote(&self, amount: Amount) -> Result<Charge> {
        if !self.state.is_active() {
            return Err(LedgerError::AccountInactive(self.name.clone()));
        }
        self.check_amount(amount)?;
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds(self.name.clone()));
        }
        Ok(Charge::compute(self.kind, amount))
    }

    /// Applies a charge obtained from [`Account::quote`].
    pub(crate) fn debit(&mut self, charge: &Charge, entry: HistoryEntry) {
        self.balance -= charge.gross;
        self.history.push(entry);
    }

    /// Validates an incoming transfer credit without touching the account.
    pub(crate) fn check_credit(&self, amount: Amount) -> Result<()> {
        self.credited_balance(amount).map(|_| ())
    }

    /// Incoming transfer credit. Not state-gated and not recorded in history.
    pub(crate) fn credit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.credited_balance(amount)?;
        Ok(())
    }

    fn credited_balance(&self, amount: Amount) -> Result<Amount> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::AmountOverflow(self.name.clone()))
    }

    pub fn activate(&mut self) -> Result<Outcome> {
        self.state = self
            .state
            .apply(Transition::Activate)
            .ok_or_else(|| LedgerError::AlreadyActive(self.name.clone()))?;
        Ok(Outcome::Activated {
            name: self.name.clone(),
        })
    }

    pub fn deactivate(&mut self) -> Result<Outcome> {
        self.state = self
            .state
            .apply(Transition::Deactivate)
            .ok_or_else(|| LedgerError::AlreadyInactive(self.name.clone()))?;
        Ok(Outcome::Deactivated {
            name: self.name.clone(),
        })
    }

    pub fn view(&self) -> AccountView {
        AccountView {
            name: self.name.clone(),
            kind: self.kind,
            balance: self.balance,
            state: self.state,
            history: self.history.clone(),
        }
    }

    fn check_amount(&self, amount: Amount) -> Result<()> {
        if !amount.is_within_range() {
            return Err(LedgerError::AmountOverflow(self.name.clone()));
        }
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount {
                account: self.name.clone(),
                amount,
            });
        }
        Ok(())
    }
}
