use std::collections::HashSet;

use crate::{
    common::{
        error::{DirectoryError, LedgerError, Validation},
        money::Money,
    },
    domain::{account::Account, ledger, username::assign_handles},
};

/// The set of open accounts, in creation order.
#[derive(Debug, Default)]
pub struct Directory {
    accounts: Vec<Account>,
}

impl Directory {
    /// Derives every handle and rejects empty or colliding ones.
    pub fn new(mut accounts: Vec<Account>) -> Result<Self, DirectoryError> {
        assign_handles(&mut accounts);

        {
            let mut seen = HashSet::new();
            for acc in &accounts {
                if acc.handle().is_empty() {
                    return Err(DirectoryError::EmptyHandle(acc.owner().to_string()));
                }
                if !seen.insert(acc.handle()) {
                    return Err(DirectoryError::DuplicateHandle(acc.handle().to_string()));
                }
            }
        }

        Ok(Self { accounts })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn handles(&self) -> Vec<&str> {
        self.accounts.iter().map(Account::handle).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn find_by_handle(&self, handle: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.handle() == handle)
    }

    pub fn find_index_by_handle(&self, handle: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.handle() == handle)
    }

    pub fn overall_balance(&self) -> Money {
        ledger::overall_balance(&self.accounts)
    }

    /// Moves `amount` from `sender` to `receiver`.
    ///
    /// Every check runs before the first movement is appended, so a declined
    /// transfer leaves both histories untouched.
    pub fn transfer(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: Money,
    ) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(Validation::NonPositiveAmount(amount).into());
        }

        let from = self
            .find_index_by_handle(sender)
            .ok_or_else(|| LedgerError::NotFound(sender.to_string()))?;
        let to = self
            .find_index_by_handle(receiver)
            .ok_or_else(|| Validation::UnknownReceiver(receiver.to_string()))?;

        if from == to {
            return Err(Validation::SelfTransfer.into());
        }

        let balance = self.accounts[from].balance();
        if balance < amount {
            return Err(Validation::InsufficientBalance { balance, amount }.into());
        }

        let debit = -amount;
        if !ledger::accepts_movement(self.accounts[from].movements(), debit)
            || !ledger::accepts_movement(self.accounts[to].movements(), amount)
        {
            return Err(Validation::AmountOverflow(amount).into());
        }

        self.accounts[from].push_movement(debit);
        self.accounts[to].push_movement(amount);
        Ok(())
    }

    /// Credits a loan when some existing movement reaches 10% of `amount`.
    pub fn grant_loan(&mut self, handle: &str, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(Validation::NonPositiveAmount(amount).into());
        }

        let idx = self
            .find_index_by_handle(handle)
            .ok_or_else(|| LedgerError::NotFound(handle.to_string()))?;
        let acc = &mut self.accounts[idx];

        if !ledger::has_collateral_for(acc.movements(), amount) {
            return Err(Validation::InsufficientCollateral(amount).into());
        }
        if !ledger::accepts_movement(acc.movements(), amount) {
            return Err(Validation::AmountOverflow(amount).into());
        }

        acc.push_movement(amount);
        Ok(())
    }

    /// Removes the account for good when `pin` matches. Returns the removed record.
    pub fn close_account(&mut self, handle: &str, pin: u32) -> Result<Account, LedgerError> {
        let idx = self
            .find_index_by_handle(handle)
            .filter(|&idx| self.accounts[idx].pin_matches(pin))
            .ok_or(LedgerError::AuthenticationFailed)?;

        Ok(self.accounts.remove(idx))
    }
}
