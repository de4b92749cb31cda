pub mod close;
pub mod loan;
pub mod login;
pub mod logout;
pub mod sort;
pub mod transfer;

use crate::{common::error::LedgerError, domain::bank::Bank};

/// Handle of the logged-in account, for intents that act on it. A session
/// whose account is no longer in the directory counts as no session.
pub(crate) fn active_handle(bank: &Bank) -> Result<String, LedgerError> {
    bank.session
        .active_in(&bank.directory)
        .map(str::to_string)
        .ok_or(LedgerError::NoSession)
}
