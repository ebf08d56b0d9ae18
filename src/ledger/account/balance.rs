use crate::ledger::Amount;

use super::account::TransactionError;

/// The money held by an account.
///
/// Every change goes through checked arithmetic on the balance itself, so a
/// change that doesn't fit in an `Amount` fails with `Overflow` and leaves the
/// balance as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    amount: Amount,
}

impl Balance {
    pub const fn new(amount: Amount) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.amount = self.checked_add(amount)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    /// Whether `add(amount)` would succeed, without applying it.
    pub fn can_add(&self, amount: Amount) -> bool {
        self.checked_add(amount).is_ok()
    }

    fn checked_add(&self, amount: Amount) -> Result<Amount, TransactionError> {
        self.amount
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use crate::ledger::account::account::TransactionError;

    use super::Balance;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_subtract() {
        let mut balance = Balance::default();
        balance.add(dec!(1000)).expect("should not overflow");
        balance.subtract(dec!(300)).expect("should not overflow");
        balance.subtract(dec!(712.50)).expect("should not overflow");

        assert_eq!(dec!(-12.50), balance.amount());
    }

    #[test]
    fn test_add_overflow() {
        let mut balance = Balance::new(Decimal::MAX);

        assert!(!balance.can_add(dec!(1)));
        assert_eq!(Err(TransactionError::Overflow), balance.add(dec!(1)));
        assert_eq!(Decimal::MAX, balance.amount());
    }

    #[test]
    fn test_subtract_overflow() {
        let mut balance = Balance::new(-Decimal::MAX);

        assert_eq!(Err(TransactionError::Overflow), balance.subtract(dec!(1)));
        assert_eq!(-Decimal::MAX, balance.amount());
    }

    #[test]
    // Overflow depends on the current balance, not on how much went through it.
    fn test_no_overflow_after_large_movements() {
        let large = Decimal::from_i128_with_scale(70_000_000_000_000_000_000_000_000_000, 0);
        let mut balance = Balance::default();

        balance.add(large).expect("should not overflow");
        balance.subtract(large).expect("should not overflow");
        assert_eq!(dec!(0), balance.amount());

        balance.add(large).expect("balance is back to zero, so this fits");
        assert_eq!(large, balance.amount());
        assert!(balance.can_add(-large));
    }

    #[test]
    // Subtracting a negative amount is an addition, and is bounded like one.
    fn test_subtract_negative_overflow() {
        let mut balance = Balance::new(dec!(1));

        assert_eq!(
            Err(TransactionError::Overflow),
            balance.subtract(-Decimal::MAX)
        );
        assert_eq!(dec!(1), balance.amount());
    }
}
