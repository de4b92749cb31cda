use crate::{
    common::{error::LedgerError, event::Intent},
    domain::bank::Bank,
    worker::handlers::{close, loan, login, logout, sort, transfer},
};

/// What became of a dispatched intent.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing was mutated.
    Declined(LedgerError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Applies one intent. A declined intent is logged and reported, never fatal.
    pub fn process(&mut self, bank: &mut Bank, intent: Intent) -> Outcome {
        let res = match &intent {
            Intent::Login { handle, pin } => login::handle(bank, handle, *pin),
            Intent::Transfer { to, amount } => transfer::handle(bank, to, *amount),
            Intent::Loan { amount } => loan::handle(bank, *amount),
            Intent::Close { handle, pin } => close::handle(bank, handle, *pin),
            Intent::Sort => sort::handle(bank),
            Intent::Logout => logout::handle(bank),
        };

        match res {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                tracing::warn!(?intent, %err, "intent declined");
                Outcome::Declined(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{error::Validation, money::Money};

    fn login(handle: &str, pin: u32) -> Intent {
        Intent::Login {
            handle: handle.to_string(),
            pin,
        }
    }

    #[test]
    fn dispatches_a_full_session() {
        let mut bank = Bank::seeded().unwrap();
        let mut processor = Processor::new();

        let intents = vec![
            login("js", 1111),
            Intent::Transfer {
                to: "jd".to_string(),
                amount: Money::from_units(100),
            },
            Intent::Loan {
                amount: Money::from_units(1000),
            },
            Intent::Sort,
            Intent::Logout,
        ];
        for intent in intents {
            assert_eq!(processor.process(&mut bank, intent), Outcome::Applied);
        }

        let js = bank.directory.find_by_handle("js").unwrap();
        assert_eq!(js.balance(), Money::from_units(4740));
        assert!(!bank.session.is_active());
    }

    #[test]
    fn declined_intents_do_not_stop_processing() {
        let mut bank = Bank::seeded().unwrap();
        let mut processor = Processor::new();

        assert_eq!(
            processor.process(&mut bank, Intent::Sort),
            Outcome::Declined(LedgerError::NoSession)
        );
        assert!(processor.process(&mut bank, login("jd", 2222)).is_applied());
        assert_eq!(
            processor.process(
                &mut bank,
                Intent::Transfer {
                    to: "jd".to_string(),
                    amount: Money::from_units(50),
                }
            ),
            Outcome::Declined(Validation::SelfTransfer.into())
        );
        assert!(
            processor
                .process(
                    &mut bank,
                    Intent::Close {
                        handle: "jd".to_string(),
                        pin: 2222,
                    }
                )
                .is_applied()
        );
        assert_eq!(bank.directory.handles(), ["js", "stw", "ss"]);
    }
}
