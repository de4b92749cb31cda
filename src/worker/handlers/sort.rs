use crate::{common::error::LedgerError, domain::bank::Bank, worker::handlers::active_handle};

pub fn handle(bank: &mut Bank) -> Result<(), LedgerError> {
    active_handle(bank)?;
    let ascending = bank.session.toggle_sort();
    tracing::debug!(ascending, "sort toggled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{common::error::LedgerError, domain::bank::Bank, worker::handlers::login};

    #[test]
    fn sort_flips_toggle_without_touching_movements() {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, "stw", 3333).unwrap();
        let before = bank.directory.find_by_handle("stw").unwrap().movements().to_vec();

        handle(&mut bank).unwrap();
        assert!(bank.session.is_sorted());
        handle(&mut bank).unwrap();
        assert!(!bank.session.is_sorted());

        assert_eq!(bank.directory.find_by_handle("stw").unwrap().movements(), before);
    }

    #[test]
    fn sort_requires_session() {
        let mut bank = Bank::seeded().unwrap();
        assert_eq!(handle(&mut bank), Err(LedgerError::NoSession));
    }
}
