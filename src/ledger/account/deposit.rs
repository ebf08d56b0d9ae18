use crate::ledger::Amount;

use super::account::{Account, TransactionError};

impl Account {
    /// Add money to the account. The amount must be strictly positive.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        self.balance.add(amount)
    }
}
