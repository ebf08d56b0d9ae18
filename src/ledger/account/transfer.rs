use crate::ledger::Amount;

use super::account::{Account, TransactionError};

impl Account {
    /// Move money from this account to `destination`: a withdrawal here, then
    /// a deposit there.
    ///
    /// Everything that could make the deposit fail is checked before the
    /// withdrawal, so either both sides move or neither does.
    pub fn transfer(
        &mut self,
        amount: Amount,
        destination: &mut Account,
    ) -> Result<(), TransactionError> {
        self.check_transfer(amount)?;
        if !destination.balance.can_add(amount) {
            return Err(TransactionError::Overflow);
        }

        self.withdraw(amount)?;
        destination.deposit(amount)
    }

    /// Preconditions of a transfer out of this account. Non-positive amounts
    /// are rejected whatever the account's `WithdrawalPolicy`.
    pub(crate) fn check_transfer(&self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        let balance = self.balance();
        if amount > balance {
            return Err(TransactionError::InsufficientFunds { amount, balance });
        }

        Ok(())
    }
}
