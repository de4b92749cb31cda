use std::io::Write;

use crate::domain::{account::Account, movement::StatementLine};

#[derive(serde::Serialize)]
/// Internal CSV output row for the account overview.
///
/// Headers written (in this order): `handle,owner,balance,in,out,interest`.
/// Monetary fields are formatted to 4 decimal places as strings.
struct SummaryRow<'a> {
    handle: &'a str,
    owner: &'a str,
    balance: String,
    #[serde(rename = "in")]
    deposits: String,
    #[serde(rename = "out")]
    withdrawals: String,
    interest: String,
}

#[derive(serde::Serialize)]
struct StatementRow {
    index: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    amount: String,
    description: String,
}

/// Writes one summary row per account, in directory order.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bankist_ledger::domain::bank::Bank;
/// use bankist_ledger::io::writer::write_accounts;
///
/// let bank = Bank::seeded().unwrap();
/// let mut out = Vec::new();
/// write_accounts(&mut out, bank.directory.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("handle,owner,balance,in,out,interest\n"));
/// assert!(s.contains("\nss,Sarah Smith,2270.0000,"));
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        let summary = acc.summary();
        wtr.serialize(SummaryRow {
            handle: acc.handle(),
            owner: acc.owner(),
            balance: summary.balance.to_string_4dp(),
            deposits: summary.deposits.to_string_4dp(),
            withdrawals: summary.withdrawals.to_string_4dp(),
            interest: summary.interest.to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes statement lines as `index,type,amount,description`.
///
/// The header is written even when there are no lines.
pub fn write_statement<W: Write>(writer: W, lines: &[StatementLine]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // serde headers are only emitted with the first record
    wtr.write_record(["index", "type", "amount", "description"])?;
    for line in lines {
        wtr.serialize(StatementRow {
            index: line.index,
            kind: line.kind.as_str(),
            amount: line.amount.to_string_4dp(),
            description: line.describe(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
