use crate::ledger::Amount;

use super::account::{Account, AccountKind, AccountType, TransactionError};

impl Account {
    /// Charge the monthly maintenance fee of a checking account and return it.
    ///
    /// There is no funds check: the fee can take the balance below zero.
    pub fn charge_maintenance_fee(&mut self) -> Result<Amount, TransactionError> {
        match self.kind {
            AccountKind::Checking { maintenance_fee } => {
                self.balance.subtract(maintenance_fee)?;
                Ok(maintenance_fee)
            }
            AccountKind::Savings { .. } => Err(self.wrong_kind(AccountType::Checking)),
        }
    }

    /// Credit a month of interest to a savings account and return the credited
    /// amount, `balance * monthly_interest_rate`, unrounded.
    pub fn accrue_monthly_interest(&mut self) -> Result<Amount, TransactionError> {
        match self.kind {
            AccountKind::Savings {
                monthly_interest_rate,
            } => {
                let interest = self
                    .balance()
                    .checked_mul(monthly_interest_rate)
                    .ok_or(TransactionError::Overflow)?;
                self.balance.add(interest)?;
                Ok(interest)
            }
            AccountKind::Checking { .. } => Err(self.wrong_kind(AccountType::Savings)),
        }
    }
}
