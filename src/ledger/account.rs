//! Accounts and everything that moves money in or out of them.
//!
//! Account: a balance owned by one customer, either checking or savings.
//! Balance: credits and debits with overflow checks.
//! Statement: the printable summary of an account.

#[allow(clippy::module_inception)]
pub mod account;
pub mod balance;
mod deposit;
mod monthly;
pub mod statement;
mod transfer;
mod withdrawal;

pub use account::{Account, AccountKind, AccountType, TransactionError};
pub use balance::Balance;
pub use statement::Statement;
