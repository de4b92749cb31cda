use crate::common::money::Money;

/// A user intent read by the reader and dispatched by the processor.
///
/// Intents other than `Login` act on the account of the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Login { handle: String, pin: u32 },
    Transfer { to: String, amount: Money },
    Loan { amount: Money },
    Close { handle: String, pin: u32 },
    Sort,
    Logout,
}
