use crate::customer::Customer;
use crate::ledger::display_amount;

use super::account::{Account, AccountKind};
use rust_decimal_macros::dec;
use std::fmt;

/// The printable summary of an account.
///
/// ```text
/// === Extrato Conta Corrente ===
/// Titular: João da Silva
/// Agência: 1
/// Número: 1
/// Saldo: R$ 1187.50
/// Taxa de manutenção mensal: R$ 12.50
/// ```
pub struct Statement<'a> {
    account: &'a Account,
    owner: &'a Customer,
    currency_symbol: &'a str,
}

impl<'a> Statement<'a> {
    pub fn new(account: &'a Account, owner: &'a Customer, currency_symbol: &'a str) -> Self {
        debug_assert_eq!(account.owner(), owner.id());

        Self {
            account,
            owner,
            currency_symbol,
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.account;

        writeln!(f, "=== Extrato {} ===", account.account_type().label())?;
        writeln!(f, "Titular: {}", self.owner.name())?;
        writeln!(f, "Agência: {}", account.branch_code())?;
        writeln!(f, "Número: {}", account.number())?;
        writeln!(
            f,
            "Saldo: {} {:.2}",
            self.currency_symbol,
            display_amount(account.balance())
        )?;

        match account.kind() {
            AccountKind::Checking { maintenance_fee } => writeln!(
                f,
                "Taxa de manutenção mensal: {} {:.2}",
                self.currency_symbol,
                display_amount(maintenance_fee)
            ),
            AccountKind::Savings {
                monthly_interest_rate,
            } => writeln!(
                f,
                "Taxa de juros mensal: {:.2}%",
                display_amount(monthly_interest_rate * dec!(100))
            ),
        }
    }
}
