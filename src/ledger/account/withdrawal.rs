use crate::config::WithdrawalPolicy;
use crate::ledger::Amount;

use super::account::{Account, TransactionError};

impl Account {
    /// Take money out of the account, as long as the balance covers it.
    ///
    /// Under `WithdrawalPolicy::Permissive` a zero or negative amount is not
    /// rejected: withdrawing -10 credits 10.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if self.withdrawal_policy == WithdrawalPolicy::Symmetric && amount <= Amount::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        let balance = self.balance();
        if amount > balance {
            return Err(TransactionError::InsufficientFunds { amount, balance });
        }

        self.balance.subtract(amount)
    }
}

#[cfg(test)]
mod withdrawal_tests {
    use crate::config::WithdrawalPolicy;
    use crate::ledger::account::account::{test_account, AccountKind, TransactionError};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn savings() -> AccountKind {
        AccountKind::Savings {
            monthly_interest_rate: dec!(0.004),
        }
    }

    #[test]
    fn test_withdrawal_ok() {
        let mut acc = test_account(1, savings(), dec!(3.0));

        let got = acc.withdraw(dec!(3.0));
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(0), acc.balance());
    }

    #[test]
    fn test_withdrawal_not_enough_funds() {
        let mut acc = test_account(1, savings(), dec!(2.5));

        let got = acc.withdraw(dec!(3.0));
        assert_eq!(
            Err(TransactionError::InsufficientFunds {
                amount: dec!(3.0),
                balance: dec!(2.5)
            }),
            got
        );
        assert_eq!(dec!(2.5), acc.balance());
    }

    #[test]
    // Withdrawals only check the balance by default.
    fn test_withdrawal_permissive_non_positive() {
        let mut acc = test_account(1, savings(), dec!(10));

        acc.withdraw(dec!(0)).expect("zero withdrawal is accepted");
        assert_eq!(dec!(10), acc.balance());

        acc.withdraw(dec!(-5)).expect("negative withdrawal is accepted");
        assert_eq!(dec!(15), acc.balance());
    }

    #[test]
    // A negative withdrawal is bounded like a deposit, and the balance stays readable.
    fn test_withdrawal_permissive_negative_overflow() {
        let mut acc = test_account(1, savings(), dec!(0));

        acc.withdraw(-Decimal::MAX).expect("fits exactly");
        assert_eq!(Decimal::MAX, acc.balance());

        assert_eq!(Err(TransactionError::Overflow), acc.deposit(dec!(1)));
        assert_eq!(Err(TransactionError::Overflow), acc.withdraw(dec!(-1)));
        assert_eq!(Decimal::MAX, acc.balance());
    }

    #[test]
    fn test_withdrawal_symmetric_non_positive() {
        for amount in vec![dec!(0), dec!(-5)] {
            let mut acc = test_account(1, savings(), dec!(10));
            acc.withdrawal_policy = WithdrawalPolicy::Symmetric;

            let got = acc.withdraw(amount);
            assert_eq!(Err(TransactionError::InvalidAmount { amount }), got);
            assert_eq!(dec!(10), acc.balance());
        }
    }

    #[test]
    fn test_withdrawal_symmetric_positive() {
        let mut acc = test_account(1, savings(), dec!(10));
        acc.withdrawal_policy = WithdrawalPolicy::Symmetric;

        acc.withdraw(dec!(4)).expect("should withdraw");
        assert_eq!(dec!(6), acc.balance());
    }
}
