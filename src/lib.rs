//! # Bank Account Proxy
//!
//! A single-account balance holder behind a guarding proxy, plus a teller
//! front end that takes free-text input and renders user-facing messages.
//!
//! ## Design Principles
//!
//! - **One capability, two accounts**: [`BasicAccount`] and [`GuardedAccount`]
//!   both implement [`BankAccount`], so callers can hold either
//! - **Single source of truth**: the proxy reads its balance from the wrapped
//!   account and keeps no copy of its own
//! - **Atomic refusals**: a refused withdrawal never changes the balance
//! - **Exact arithmetic**: amounts are `rust_decimal` values; rounding only
//!   happens when formatting for display
//!
//! ## Example
//!
//! ```
//! use bank_account_proxy::{Amount, BankAccount, GuardedAccount, WithdrawalError};
//!
//! let mut account = GuardedAccount::new(Amount::ZERO);
//! account.deposit(Amount::from(2000));
//!
//! assert_eq!(
//!     account.withdraw(Amount::from(1500)),
//!     Err(WithdrawalError::LimitExceeded)
//! );
//! assert_eq!(account.balance().to_currency(), "$2,000.00");
//! ```

pub mod account;
pub mod amount;
pub mod command;
pub mod error;
pub mod proxy;
pub mod teller;

pub use account::{BankAccount, BasicAccount};
pub use amount::Amount;
pub use command::{Action, Command, CommandRecord};
pub use error::{AmountOverflow, Result, TellerError, WithdrawalError};
pub use proxy::{GuardedAccount, WITHDRAWAL_LIMIT};
pub use teller::{Notice, Outcome, Receipt, Teller};
