//! Bank Proxy CLI
//!
//! Replays a script of teller commands against a guarded account and writes
//! one receipt per command.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > receipts.csv
//! cargo run -- script.csv 250.00 > receipts.csv
//! cat script.csv | cargo run -- - > receipts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_account_proxy::{Amount, GuardedAccount, Result, Teller, TellerError};
use log::debug;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(TellerError::MissingArgument);
    }

    let initial_balance = match args.get(2) {
        Some(value) => {
            Amount::from_str(value).map_err(|_| TellerError::InvalidInitialBalance {
                value: value.clone(),
            })?
        }
        None => Amount::ZERO,
    };

    let input: Box<dyn Read> = match args[1].as_str() {
        "-" => Box::new(io::stdin().lock()),
        path => Box::new(File::open(path)?),
    };

    let mut teller = Teller::new(GuardedAccount::new(initial_balance));
    teller.process_csv(BufReader::new(input))?;
    debug!("Final balance {}", teller.balance_display());

    let stdout = io::stdout();
    let handle = stdout.lock();
    teller.write_output(handle)?;

    Ok(())
}
