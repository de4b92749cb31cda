use crate::{common::error::LedgerError, domain::bank::Bank};

pub fn handle(bank: &mut Bank, handle: &str, pin: u32) -> Result<(), LedgerError> {
    let acc = bank.session.login(&bank.directory, handle, pin)?;
    tracing::info!(handle, "Welcome back, {}", acc.first_name());
    Ok(())
}
