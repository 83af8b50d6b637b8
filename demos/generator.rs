//! This example generates a CSV file with a batch of teller requests (configurable through
//! the constants) for a number of accounts supplied as a command-line argument.
//!
//! The CSV file can then be used to test the `cashpoint` crate.
//!
//! Example (100 accounts):
//! ```bash
//! cargo run --example generator 100 > data/100_accounts.csv
//! ```
//! ### Maths
//! Based on the constants, we can easily derive the ending balance for any account.
//!
//! Let:
//! - D = NUM_DEPOSITS, W = NUM_WITHDRAWALS,
//! - B = BASE_INITIAL_BALANCE, A_d = BASE_DEPOSIT_AMOUNT, A_w = BASE_WITHDRAWAL_AMOUNT,
//! - and i = account index (1-based).
//!
//! Account i is registered with B·i, receives D deposits of A_d·i and W withdrawals
//! of A_w·i, so its final balance is (B + D·A_d − W·A_w)·i.
//! With our constants: (100 + 3·10 − 2·5)·i = 120·i.
//!
//! Account i is keyed by card number 10000000+i and PIN 9000+i, owned by "Holder i".
//!
//! If the teller is correctly implemented, the summary row for any account in the
//! output CSV should match the maths above.

use cashpoint::{Request, RequestType};
use csv::Writer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // Get command-line arguments
    let args: Vec<String> = env::args().collect();

    // Ensure we have the correct number of arguments
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    // Parse NUM_ACCOUNTS from the first argument
    let num_accounts: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    // Configuration constants.
    const NUM_DEPOSITS: usize = 3;
    const NUM_WITHDRAWALS: usize = 2;
    // Registration round + balance-changing rounds.
    const TOTAL_ROUNDS: usize = 1 + NUM_DEPOSITS + NUM_WITHDRAWALS;

    // Base amounts; these will be scaled by the account index.
    const BASE_INITIAL_BALANCE: Decimal = dec!(100.00);
    const BASE_DEPOSIT_AMOUNT: Decimal = dec!(10.00);
    const BASE_WITHDRAWAL_AMOUNT: Decimal = dec!(5.00);

    let mut wtr = Writer::from_writer(std::io::stdout());

    // Emit requests round by round.
    // In each round, every account produces its next request in its internal order.
    for round in 0..TOTAL_ROUNDS {
        for account in 1..=num_accounts {
            let scale = Decimal::from(account);
            let card = 10_000_000 + account;
            let pin = 9000 + account;
            let request = if round == 0 {
                // Registration round: open the account with its starting balance.
                Request {
                    op: RequestType::Register,
                    card,
                    pin,
                    owner: Some(format!("Holder {}", account)),
                    amount: Some(BASE_INITIAL_BALANCE * scale),
                    dest: None,
                }
            } else if round <= NUM_DEPOSITS {
                Request {
                    op: RequestType::Deposit,
                    card,
                    pin,
                    owner: None,
                    amount: Some(BASE_DEPOSIT_AMOUNT * scale),
                    dest: None,
                }
            } else {
                Request {
                    op: RequestType::Withdraw,
                    card,
                    pin,
                    owner: None,
                    amount: Some(BASE_WITHDRAWAL_AMOUNT * scale),
                    dest: None,
                }
            };
            wtr.serialize(request)?;
        }
    }
    wtr.flush()?;
    Ok(())
}
