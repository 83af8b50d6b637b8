use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::write_csv,
    dto::{AccountRow, Request},
    Error as TellerError, Teller,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the teller async on the given request batch and writes the final
/// account summary to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams requests from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - receives requests from the channel and applies them to the teller until the channel is closed.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing requests from reader to processor
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_requests(input_path, tx));
    let processor_handle = tokio::spawn(process_requests(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    // Get final teller state; ledger export failures surface here
    let teller = processor_handle.await??;

    // Sort accounts by card number and PIN for deterministic output
    let mut accounts: Vec<_> = teller.accounts().iter().map(AccountRow::from).collect();
    accounts.sort_by_key(|row| (row.card, row.pin));

    // Write the account summary to the provided writer
    write_csv(writer, accounts.into_iter())?;
    Ok(())
}

/// Reads and deserializes requests from a CSV file.
/// Returns them through the provided channel.
async fn read_requests(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Request>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Request>();
    while let Some(result) = records.next().await {
        match result {
            Ok(request) => {
                if tx.send(request).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Applies requests received through the channel to a fresh teller.
/// Returns the final teller state once the channel is closed by the reader.
async fn process_requests(mut rx: mpsc::Receiver<Request>) -> Result<Teller, std::io::Error> {
    let mut teller = Teller::new();
    while let Some(request) = rx.recv().await {
        match teller.process_request(request) {
            // A destination refusing a ledger export is critical
            Err(TellerError::Io(err)) => return Err(err),
            // Rejected requests leave the teller untouched - skip them
            _ => {}
        }
    }
    Ok(teller)
}
