use crate::{common::error::LedgerError, domain::bank::Bank};

pub fn handle(bank: &mut Bank, handle: &str, pin: u32) -> Result<(), LedgerError> {
    let removed = bank
        .session
        .close_current(&mut bank.directory, handle, pin)?;
    tracing::info!(handle = removed.handle(), "account closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::error::LedgerError,
        domain::bank::Bank,
        worker::handlers::login,
    };

    #[test]
    fn closing_own_account_removes_it_and_logs_out() {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, "jd", 2222).unwrap();

        handle(&mut bank, "jd", 2222).unwrap();

        assert_eq!(bank.directory.handles(), ["js", "stw", "ss"]);
        assert!(!bank.session.is_active());
    }

    #[test]
    fn closing_with_wrong_pin_keeps_account() {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, "jd", 2222).unwrap();

        assert_eq!(handle(&mut bank, "jd", 1111), Err(LedgerError::AuthenticationFailed));

        assert_eq!(bank.directory.len(), 4);
        assert_eq!(bank.session.active_handle(), Some("jd"));
    }
}
