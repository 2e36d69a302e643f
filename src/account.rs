//! The account capability and its unguarded store.

use crate::amount::Amount;
use crate::error::{AmountOverflow, WithdrawalError};
use log::warn;

/// Operations shared by every kind of account.
///
/// Callers hold any implementor without knowing whether withdrawals are
/// guarded. Implementations are single-owner and synchronous.
pub trait BankAccount {
    /// Credits the account. Never refused by policy.
    ///
    /// A credit whose result would be out of range leaves the balance
    /// untouched; check [`BankAccount::can_deposit`] first to report it.
    fn deposit(&mut self, amount: Amount);

    /// Debits the account.
    ///
    /// On `Err` the balance must be left untouched.
    fn withdraw(&mut self, amount: Amount) -> Result<(), WithdrawalError>;

    /// Returns the current balance.
    fn balance(&self) -> Amount;

    /// Returns `true` if crediting `amount` keeps the balance in range.
    fn can_deposit(&self, amount: Amount) -> bool {
        self.balance().checked_add(amount).is_some()
    }
}

/// Plain balance holder with no policy.
///
/// Deposits and withdrawals are applied as given, so the balance can go
/// negative. Wrap it in a [`GuardedAccount`](crate::GuardedAccount) to enforce
/// withdrawal rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicAccount {
    balance: Amount,
}

impl BasicAccount {
    /// Creates an account with a zero balance.
    pub fn new() -> Self {
        BasicAccount {
            balance: Amount::ZERO,
        }
    }

    /// Creates an account holding `initial`. The value is not validated.
    pub fn with_balance(initial: Amount) -> Self {
        if initial < Amount::ZERO {
            warn!("Opening account with negative balance {}", initial);
        }
        BasicAccount { balance: initial }
    }
}

impl BankAccount for BasicAccount {
    fn deposit(&mut self, amount: Amount) {
        match self.balance.checked_add(amount) {
            Some(balance) => self.balance = balance,
            None => warn!(
                "Deposit of {} onto {} is out of range, ignoring",
                amount, self.balance
            ),
        }
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), WithdrawalError> {
        self.balance = self.balance.checked_sub(amount).ok_or(AmountOverflow)?;
        Ok(())
    }

    fn balance(&self) -> Amount {
        self.balance
    }
}
