//! A small in-memory digital bank.
//!
//! Customers own checking and savings accounts. Accounts support deposits,
//! withdrawals and transfers, plus a monthly operation that depends on their
//! type: checking accounts pay a maintenance fee, savings accounts earn interest.

pub mod bank;
pub mod config;
pub mod customer;
pub mod error_handler;
pub mod ledger;
pub mod run;
