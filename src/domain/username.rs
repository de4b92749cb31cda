use crate::domain::account::Account;

/// Lowercase initials of each whitespace-separated token of `owner`.
///
/// ```
/// use bankist_ledger::domain::username::derive_handle;
///
/// assert_eq!(derive_handle("Jessica Davis"), "jd");
/// assert_eq!(derive_handle("Steven Thomas Williams"), "stw");
/// ```
pub fn derive_handle(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Assigns a handle to every account. Runs once, before any lookup.
pub fn assign_handles(accounts: &mut [Account]) {
    for acc in accounts.iter_mut() {
        let handle = derive_handle(acc.owner());
        acc.set_handle(handle);
    }
}
