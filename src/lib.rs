pub mod analytics;
pub mod auth;
pub mod concurrent;
pub mod error;
pub mod ledger;
pub mod models;
pub mod nutrition;
pub mod seed;
pub mod session;
pub mod store;

use std::io::Write;

use error::Result;
use models::transaction::StatementRow;
use models::Transaction;

/// Write a CSV statement for the given ledger records, one flat row per
/// record, in the order given (the store keeps newest first).
pub fn export_statement<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for tx in transactions {
        csv_writer.serialize(StatementRow::from(tx))?;
    }

    csv_writer.flush()?;
    Ok(())
}
