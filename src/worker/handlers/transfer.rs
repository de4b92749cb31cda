use crate::{
    common::{error::LedgerError, money::Money},
    domain::bank::Bank,
    worker::handlers::active_handle,
};

pub fn handle(bank: &mut Bank, to: &str, amount: Money) -> Result<(), LedgerError> {
    let from = active_handle(bank)?;
    bank.directory.transfer(&from, to, amount)?;
    tracing::info!(from = %from, to, %amount, "transfer applied");
    Ok(())
}
