use crate::{
    common::{error::LedgerError, money::Money},
    domain::bank::Bank,
    worker::handlers::active_handle,
};

pub fn handle(bank: &mut Bank, amount: Money) -> Result<(), LedgerError> {
    let handle = active_handle(bank)?;
    bank.directory.grant_loan(&handle, amount)?;
    tracing::info!(handle = %handle, %amount, "loan granted");
    Ok(())
}
