use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::{read_csv, write_csv},
    dto::{AccountRow, Request},
    Error as TellerError, Teller,
};

/// Runs the teller on the given request batch and writes the final account
/// summary to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing teller requests
/// * `writer` - Where to write the account summary (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * A ledger export destination cannot be written
/// * Writing the summary fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut teller = Teller::new();

    let requests_iter = read_csv::<Request, _>(input_path)?;
    for request in requests_iter {
        // CSV parsing errors are critical - propagate them
        let request = request?;
        match teller.process_request(request) {
            // A destination refusing a ledger export is critical too
            Err(TellerError::Io(err)) => return Err(err.into()),
            // Rejected requests leave the teller untouched - skip them
            _ => {}
        }
    }

    // Sort accounts by card number and PIN for deterministic output
    let mut accounts: Vec<_> = teller.accounts().iter().map(AccountRow::from).collect();
    accounts.sort_by_key(|row| (row.card, row.pin));

    // Write the account summary to the provided writer
    write_csv(writer, accounts.into_iter())?;
    Ok(())
}
