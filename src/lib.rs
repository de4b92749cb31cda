//! Account ledger for the Bankist demo bank: derived balances and summaries
//! over movement histories, plus login, transfer, loan, close and sort
//! intents applied to an in-memory account directory.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
