use std::io;
use std::str::FromStr;

use anyhow::{Context, Result};
use bank_ledger::auth::authenticate;
use bank_ledger::{export_statement, seed};
use rust_decimal::Decimal;

/// Demo walkthrough: log the seeded customer in, run one of each ledger
/// operation, and print their statement as CSV.
fn main() -> Result<()> {
    let mut store = seed::demo_store();

    let customer_id = authenticate(&store, "customer@bankpro.com", "password123")
        .context("Failed to log the demo customer in")?
        .id;
    let admin_id = authenticate(&store, "admin@bankpro.com", "adminpass")
        .context("Failed to log the demo administrator in")?
        .id;
    let admin_account = store
        .user(admin_id)
        .map(|u| u.account_number.clone())
        .context("Missing demo administrator")?;

    store
        .deposit(customer_id, dec("250"), Some("Demo deposit"))
        .context("Deposit failed")?;
    store
        .withdraw(customer_id, dec("40"), Some("Demo withdrawal"))
        .context("Withdrawal failed")?;
    store
        .transfer(customer_id, &admin_account, dec("30"), None)
        .context("Transfer failed")?;
    store
        .correct(customer_id, dec("-15.25"), "Fee reversal adjustment")
        .context("Correction failed")?;

    let statement: Vec<_> = store
        .transactions_for(customer_id)
        .into_iter()
        .cloned()
        .collect();
    export_statement(&statement, io::stdout()).context("Failed to write statement")?;

    Ok(())
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("static demo amount")
}
