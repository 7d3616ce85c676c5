use serde::Serialize;
use std::fmt;

/// Activation state of an account. Withdrawals and outgoing transfers need `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AccountState {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activate,
    Deactivate,
}

impl AccountState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountState::Active => "Active",
            AccountState::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        *self == AccountState::Active
    }

    /// Returns the next state, or `None` if the account is already in the target state.
    pub fn apply(self, transition: Transition) -> Option<AccountState> {
        match (self, transition) {
            (AccountState::Inactive, Transition::Activate) => Some(AccountState::Active),
            (AccountState::Active, Transition::Deactivate) => Some(AccountState::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_active() {
        assert_eq!(AccountState::default(), AccountState::Active);
    }

    #[test]
    fn test_transition_table() {
        use AccountState::*;
        use Transition::*;

        assert_eq!(Active.apply(Deactivate), Some(Inactive));
        assert_eq!(Inactive.apply(Activate), Some(Active));
        assert_eq!(Active.apply(Activate), None);
        assert_eq!(Inactive.apply(Deactivate), None);
    }
}
