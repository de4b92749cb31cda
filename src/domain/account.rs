use crate::common::{money::Money, rate::InterestRate};
use crate::domain::{ledger, movement::StatementLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    owner: String,
    /// Login handle, assigned once by the directory.
    handle: String,
    pin: u32,
    /// Append-only history; positive amounts are deposits.
    movements: Vec<Money>,
    interest_rate: InterestRate,
}

/// Aggregates shown next to an account's movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSummary {
    pub balance: Money,
    pub deposits: Money,
    pub withdrawals: Money,
    pub interest: Money,
}

impl Account {
    pub fn new(
        owner: impl Into<String>,
        pin: u32,
        movements: Vec<Money>,
        interest_rate: InterestRate,
    ) -> Self {
        Self {
            owner: owner.into(),
            handle: String::new(),
            pin,
            movements,
            interest_rate,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub(crate) fn set_handle(&mut self, handle: String) {
        self.handle = handle;
    }

    pub fn pin_matches(&self, pin: u32) -> bool {
        self.pin == pin
    }

    pub fn movements(&self) -> &[Money] {
        &self.movements
    }

    pub fn interest_rate(&self) -> InterestRate {
        self.interest_rate
    }

    pub(crate) fn push_movement(&mut self, amount: Money) {
        self.movements.push(amount);
    }

    pub fn balance(&self) -> Money {
        ledger::balance(&self.movements)
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            balance: self.balance(),
            deposits: ledger::total_deposits(&self.movements),
            withdrawals: ledger::total_withdrawals(&self.movements),
            interest: ledger::qualifying_interest(&self.movements, self.interest_rate),
        }
    }

    /// Movements in display order, numbered from 1.
    pub fn statement(&self, ascending: bool) -> Vec<StatementLine> {
        ledger::sorted_view(&self.movements, ascending)
            .into_iter()
            .enumerate()
            .map(|(i, amount)| StatementLine::new(i + 1, amount))
            .collect()
    }
}
