//! Teller front end for an account.
//!
//! The teller takes free-text amounts the way a form field would, calls the
//! account through [`BankAccount`], and turns the result into a message for
//! the user. Scripts of commands can be replayed from CSV and the resulting
//! receipts written back out as CSV.

use crate::account::BankAccount;
use crate::amount::Amount;
use crate::command::{Action, Command, CommandRecord};
use crate::error::{AmountOverflow, Result, WithdrawalError};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;

/// Shown after an accepted deposit.
pub const MSG_DEPOSITED: &str = "Successfully deposited.";
/// Shown after an accepted withdrawal.
pub const MSG_WITHDRAWN: &str = "Successfully withdrawn.";
/// Shown for a balance check.
pub const MSG_BALANCE: &str = "Balance checked.";
/// Shown when the amount text is not a number.
pub const MSG_INVALID_INPUT: &str = "Invalid amount. Please enter a valid number.";

/// Whether a command went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The account was called and the command took effect.
    Accepted,
    /// The input or the account refused the command.
    Rejected,
}

/// User-facing result of a single teller command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Whether the command went through.
    pub outcome: Outcome,

    /// Parsed amount, `None` if the input was not a number or not needed.
    pub amount: Option<Amount>,

    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    fn accepted(amount: Option<Amount>, message: impl Into<String>) -> Self {
        Notice {
            outcome: Outcome::Accepted,
            amount,
            message: message.into(),
        }
    }

    fn rejected(amount: Option<Amount>, message: impl Into<String>) -> Self {
        Notice {
            outcome: Outcome::Rejected,
            amount,
            message: message.into(),
        }
    }

    /// Returns `true` if the command was accepted.
    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }
}

/// One line of session output.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Script row, 1-indexed including the header.
    pub row: usize,

    /// Command that was run.
    pub action: Action,

    /// Parsed amount, empty if the input was not a number.
    pub amount: Option<Amount>,

    /// Whether the command went through.
    pub outcome: Outcome,

    /// Text shown to the user.
    pub message: String,

    /// Balance after the command, formatted as currency.
    pub balance: String,
}

/// Presentation layer over any [`BankAccount`].
pub struct Teller<A> {
    account: A,
    receipts: Vec<Receipt>,
}

impl<A: BankAccount> Teller<A> {
    /// Creates a teller serving `account`.
    pub fn new(account: A) -> Self {
        Teller {
            account,
            receipts: Vec::new(),
        }
    }

    /// Parses `input` and deposits it.
    ///
    /// A deposit that would take the balance out of range is rejected with
    /// an `Error: ` message and the balance is left as it was.
    pub fn deposit(&mut self, input: &str) -> Notice {
        let amount = match Amount::from_str(input) {
            Ok(amount) => amount,
            Err(e) => {
                debug!("Deposit input {:?} rejected: {}", input, e);
                return Notice::rejected(None, MSG_INVALID_INPUT);
            }
        };

        if !self.account.can_deposit(amount) {
            debug!(
                "Deposit of {} onto {} rejected: out of range",
                amount,
                self.account.balance()
            );
            return Notice::rejected(Some(amount), format!("Error: {}", AmountOverflow));
        }

        self.account.deposit(amount);
        Notice::accepted(Some(amount), MSG_DEPOSITED)
    }

    /// Parses `input` and tries to withdraw it.
    ///
    /// Limit and funds refusals are shown as-is; anything else is prefixed
    /// with `Error: `.
    pub fn withdraw(&mut self, input: &str) -> Notice {
        let amount = match Amount::from_str(input) {
            Ok(amount) => amount,
            Err(e) => {
                debug!("Withdrawal input {:?} rejected: {}", input, e);
                return Notice::rejected(None, MSG_INVALID_INPUT);
            }
        };

        match self.account.withdraw(amount) {
            Ok(()) => Notice::accepted(Some(amount), MSG_WITHDRAWN),
            Err(e @ (WithdrawalError::LimitExceeded | WithdrawalError::InsufficientFunds)) => {
                Notice::rejected(Some(amount), e.to_string())
            }
            Err(e) => Notice::rejected(Some(amount), format!("Error: {}", e)),
        }
    }

    /// Acknowledges a balance check.
    pub fn check_balance(&self) -> Notice {
        Notice::accepted(None, MSG_BALANCE)
    }

    /// Runs a parsed command.
    pub fn execute(&mut self, command: &Command) -> Notice {
        match command.action {
            Action::Deposit => self.deposit(&command.input),
            Action::Withdraw => self.withdraw(&command.input),
            Action::Balance => self.check_balance(),
        }
    }

    /// Returns the balance formatted for display, e.g. `$1,250.00`.
    pub fn balance_display(&self) -> String {
        self.account.balance().to_currency()
    }

    /// Replays a CSV script with an `action,amount` header.
    ///
    /// Every recognised row produces a receipt. Unreadable rows and unknown
    /// actions are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(command) => self.record(row_num, &command),
                    None => warn!("Row {}: Unknown action '{}'", row_num, record.action),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    fn record(&mut self, row: usize, command: &Command) {
        let notice = self.execute(command);
        debug!(
            "Row {}: {:?} {:?} -> {:?}: {}",
            row, command.action, command.input, notice.outcome, notice.message
        );

        let balance = self.balance_display();
        self.receipts.push(Receipt {
            row,
            action: command.action,
            amount: notice.amount,
            outcome: notice.outcome,
            message: notice.message,
            balance,
        });
    }

    /// Writes all receipts as CSV, in script order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(["row", "action", "amount", "outcome", "message", "balance"])?;
        for receipt in &self.receipts {
            csv_writer.serialize(receipt)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Receipts produced so far.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Returns the account being served.
    pub fn account(&self) -> &A {
        &self.account
    }

    /// Ends the session and hands back the account.
    pub fn into_account(self) -> A {
        self.account
    }
}
