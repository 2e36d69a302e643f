//! Guarded account proxy.
//!
//! [`GuardedAccount`] owns a [`BasicAccount`] and forwards every operation to
//! it, refusing withdrawals that break the account policy. The balance is
//! always read from the inner account.

use crate::account::{BankAccount, BasicAccount};
use crate::amount::Amount;
use crate::error::WithdrawalError;
use log::debug;
use rust_decimal::Decimal;

/// Largest amount a single withdrawal may take.
pub const WITHDRAWAL_LIMIT: Amount = Amount::from_decimal(Decimal::ONE_THOUSAND);

/// Account wrapper that enforces the withdrawal policy.
///
/// # Invariants
///
/// - A withdrawal succeeds only if `0 < amount <= WITHDRAWAL_LIMIT` and
///   `amount <= balance`, so withdrawals never push the balance below zero
/// - A refused withdrawal leaves the balance unchanged
///
/// Deposits are forwarded unchecked, and the opening balance is taken as
/// given. Both may therefore leave the balance negative.
#[derive(Debug, Clone, Default)]
pub struct GuardedAccount {
    inner: BasicAccount,
}

impl GuardedAccount {
    /// Opens a guarded account holding `initial_balance`.
    pub fn new(initial_balance: Amount) -> Self {
        GuardedAccount {
            inner: BasicAccount::with_balance(initial_balance),
        }
    }

    /// Runs the withdrawal checks without touching the balance.
    pub fn check_withdrawal(&self, amount: Amount) -> Result<(), WithdrawalError> {
        if !amount.is_positive() {
            return Err(WithdrawalError::InvalidAmount);
        }

        if amount > WITHDRAWAL_LIMIT {
            return Err(WithdrawalError::LimitExceeded);
        }

        if amount > self.inner.balance() {
            return Err(WithdrawalError::InsufficientFunds);
        }

        Ok(())
    }

    /// Returns the wrapped account.
    pub fn inner(&self) -> &BasicAccount {
        &self.inner
    }
}

impl BankAccount for GuardedAccount {
    fn deposit(&mut self, amount: Amount) {
        self.inner.deposit(amount);
        debug!("Deposited {}, balance {}", amount, self.inner.balance());
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), WithdrawalError> {
        if let Err(e) = self.check_withdrawal(amount) {
            debug!(
                "Withdrawal of {} refused (balance {}): {}",
                amount,
                self.inner.balance(),
                e
            );
            return Err(e);
        }

        self.inner.withdraw(amount)?;
        debug!("Withdrew {}, balance {}", amount, self.inner.balance());
        Ok(())
    }

    fn balance(&self) -> Amount {
        self.inner.balance()
    }
}
