use crate::{
    common::error::LedgerError,
    domain::{account::Account, directory::Directory},
};

/// The logged-in account, referenced by handle, and its sort toggle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    active: Option<String>,
    sorted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown handle and wrong pin are reported the same way. On failure the
    /// previous session, if any, stays active.
    pub fn login<'d>(
        &mut self,
        directory: &'d Directory,
        handle: &str,
        pin: u32,
    ) -> Result<&'d Account, LedgerError> {
        let acc = directory
            .find_by_handle(handle)
            .filter(|acc| acc.pin_matches(pin))
            .ok_or(LedgerError::AuthenticationFailed)?;

        self.active = Some(acc.handle().to_string());
        self.sorted = false;
        Ok(acc)
    }

    /// The handle recorded at login, even if its account has since been closed.
    pub fn active_handle(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The logged-in handle, provided its account is still in `directory`.
    pub fn active_in(&self, directory: &Directory) -> Option<&str> {
        self.active
            .as_deref()
            .filter(|handle| directory.find_index_by_handle(handle).is_some())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The logged-in account, or `None` once it has been closed.
    pub fn current<'d>(&self, directory: &'d Directory) -> Option<&'d Account> {
        directory.find_by_handle(self.active.as_deref()?)
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.sorted = false;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Flips the sort toggle and returns the new state.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    /// Closes the logged-in account. The confirmation handle must name the
    /// logged-in account and `pin` must match; the session ends on success.
    pub fn close_current(
        &mut self,
        directory: &mut Directory,
        confirm_handle: &str,
        pin: u32,
    ) -> Result<Account, LedgerError> {
        let active = self.active_in(directory).ok_or(LedgerError::NoSession)?;
        if active != confirm_handle {
            return Err(LedgerError::AuthenticationFailed);
        }

        let removed = directory.close_account(active, pin)?;
        self.clear();
        Ok(removed)
    }
}
