use crate::{common::error::LedgerError, domain::bank::Bank, worker::handlers::active_handle};

/// Ends the session. A session left behind by a closed account is cleared too,
/// but reported as `NoSession`.
pub fn handle(bank: &mut Bank) -> Result<(), LedgerError> {
    let res = active_handle(bank).map(drop);
    bank.session.clear();
    res
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{common::error::LedgerError, domain::bank::Bank, worker::handlers::login};

    #[test]
    fn logout_clears_session() {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, "js", 1111).unwrap();

        handle(&mut bank).unwrap();

        assert!(!bank.session.is_active());
        assert_eq!(handle(&mut bank), Err(LedgerError::NoSession));
    }

    #[test]
    fn logout_clears_stale_session() {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, "js", 1111).unwrap();
        bank.directory.close_account("js", 1111).unwrap();

        assert_eq!(handle(&mut bank), Err(LedgerError::NoSession));
        assert!(!bank.session.is_active());
    }
}
