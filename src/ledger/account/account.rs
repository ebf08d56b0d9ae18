use crate::config::{Config, WithdrawalPolicy};
use crate::ledger::{
    sequence::{Sequence, SequenceExhausted},
    AccountNumber, Amount, BranchCode, CustomerId,
};

use super::balance::Balance;
use std::fmt;
use thiserror::Error;

/// Everything that can go wrong when moving money.
///
/// Every failed operation leaves the account(s) untouched, so these are safe
/// to report and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Deposits (and transfers) must be strictly positive.
    #[error("invalid amount {amount}")]
    InvalidAmount { amount: Amount },

    /// The amount is larger than the current balance.
    #[error("insufficient funds: tried to move {amount} but the balance is {balance}")]
    InsufficientFunds { amount: Amount, balance: Amount },

    /// A monthly operation was applied to the wrong type of account, e.g.
    /// interest on a checking account.
    #[error("operation requires a {expected} account, found a {found} account")]
    WrongAccountKind {
        expected: AccountType,
        found: AccountType,
    },

    /// The new balance wouldn't fit in an `Amount`.
    #[error("balance overflow")]
    Overflow,
}

/// The type of an account, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    /// Heading used on statements.
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Conta Corrente",
            AccountType::Savings => "Conta Poupança",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
        }
    }
}

/// The type of an account, with the monthly parameters it was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Pays a fixed maintenance fee every month.
    Checking { maintenance_fee: Amount },

    /// Earns `balance * monthly_interest_rate` every month.
    Savings { monthly_interest_rate: Amount },
}

impl AccountKind {
    pub fn from_config(account_type: AccountType, config: &Config) -> Self {
        match account_type {
            AccountType::Checking => AccountKind::Checking {
                maintenance_fee: config.maintenance_fee,
            },
            AccountType::Savings => AccountKind::Savings {
                monthly_interest_rate: config.monthly_interest_rate,
            },
        }
    }

    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Checking { .. } => AccountType::Checking,
            AccountKind::Savings { .. } => AccountType::Savings,
        }
    }
}

/// An account holds a balance on behalf of exactly one customer.
///
/// The owner is referenced by id: the account doesn't own the customer, and
/// the customer doesn't know about its accounts. Likewise, an account doesn't
/// know which bank (if any) it has been registered with.
///
/// The balance can only go negative through the maintenance fee, which skips
/// the funds check.
#[derive(Debug, Clone)]
pub struct Account {
    pub(super) branch_code: BranchCode,
    pub(super) number: AccountNumber,
    pub(super) owner: CustomerId,
    pub(super) kind: AccountKind,
    pub(super) withdrawal_policy: WithdrawalPolicy,
    pub(super) balance: Balance,
}

impl Account {
    /// Open a new, empty account.
    ///
    /// The account number is taken from `numbers`, so accounts opened from the
    /// same sequence always have distinct, increasing numbers, whatever their type.
    pub fn open(
        account_type: AccountType,
        owner: CustomerId,
        numbers: &mut Sequence,
        config: &Config,
    ) -> Result<Self, SequenceExhausted> {
        Ok(Self {
            branch_code: config.branch_code,
            number: numbers.next()?,
            owner,
            kind: AccountKind::from_config(account_type, config),
            withdrawal_policy: config.withdrawal_policy,
            balance: Balance::default(),
        })
    }

    pub fn branch_code(&self) -> BranchCode {
        self.branch_code
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    pub(super) fn wrong_kind(&self, expected: AccountType) -> TransactionError {
        TransactionError::WrongAccountKind {
            expected,
            found: self.account_type(),
        }
    }
}

/// Build an account with a given balance, bypassing the sequence.
#[cfg(test)]
pub(crate) fn test_account(number: AccountNumber, kind: AccountKind, balance: Amount) -> Account {
    Account {
        branch_code: 1,
        number,
        owner: 1,
        kind,
        withdrawal_policy: WithdrawalPolicy::Permissive,
        balance: Balance::new(balance),
    }
}
