//! Script commands for teller sessions.

use serde::{Deserialize, Serialize};

/// Raw command row as read from a script.
///
/// The amount is kept as text so the teller can report unparsable input the
/// same way an interactive prompt would.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Action name: deposit, withdraw (or withdrawal), balance
    pub action: String,

    /// Free-text amount; absent for balance checks
    #[serde(default)]
    pub amount: Option<String>,
}

impl CommandRecord {
    /// Maps the row onto a known action.
    ///
    /// Returns `None` for unknown actions. Amount text is not validated here.
    pub fn parse(&self) -> Option<Command> {
        let action = match self.action.trim().to_lowercase().as_str() {
            "deposit" => Action::Deposit,
            "withdraw" | "withdrawal" => Action::Withdraw,
            "balance" => Action::Balance,
            _ => return None,
        };

        Some(Command {
            action,
            input: self.amount.clone().unwrap_or_default(),
        })
    }
}

/// Teller action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Credit the account.
    Deposit,

    /// Debit the account, subject to its policy.
    Withdraw,

    /// Report the balance without changing it.
    Balance,
}

/// A recognised command with its raw amount text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(action: &str, amount: Option<&str>) -> CommandRecord {
        CommandRecord {
            action: action.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_deposit() {
        let cmd = record("deposit", Some("10.5")).parse().unwrap();
        assert_eq!(cmd.action, Action::Deposit);
        assert_eq!(cmd.input, "10.5");
    }

    #[test]
    fn test_parse_withdraw_aliases() {
        assert_eq!(
            record("withdraw", Some("1")).parse().unwrap().action,
            Action::Withdraw
        );
        assert_eq!(
            record("Withdrawal", Some("1")).parse().unwrap().action,
            Action::Withdraw
        );
    }

    #[test]
    fn test_parse_balance_without_amount() {
        let cmd = record("  BALANCE ", None).parse().unwrap();
        assert_eq!(cmd.action, Action::Balance);
        assert!(cmd.input.is_empty());
    }

    #[test]
    fn test_parse_keeps_bad_amount_text() {
        let cmd = record("deposit", Some("ten dollars")).parse().unwrap();
        assert_eq!(cmd.input, "ten dollars");
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(record("transfer", Some("10")).parse().is_none());
        assert!(record("", None).parse().is_none());
    }
}
