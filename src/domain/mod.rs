pub mod account;
pub mod bank;
pub mod directory;
pub mod ledger;
pub mod movement;
pub mod seed;
pub mod session;
pub mod username;
