use crate::{
    bank::BankError,
    ledger::{account::TransactionError, display_amount, Amount},
};

use std::{fmt, io::Write};

// Operations never fail loudly: a rejected operation leaves the accounts as
// they were, and the caller decides what to do with the error.
// This module turns outcomes into the one-line console messages customers
// are used to, so a scripted session prints the same text as before.
// Rejections are also logged at WARN.

/// The operation an outcome comes from. The same error reads differently
/// depending on it, e.g. insufficient funds for a withdrawal vs a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
    Transfer,
    MaintenanceFee,
    MonthlyInterest,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
            Operation::Transfer => "transfer",
            Operation::MaintenanceFee => "maintenance fee",
            Operation::MonthlyInterest => "monthly interest",
        };
        f.write_str(name)
    }
}

/// The console message for an outcome, if any.
///
/// `Ok` carries the amount the operation moved: the fee charged, the interest
/// credited, or the amount deposited/withdrawn/transferred. Successful
/// deposits, withdrawals and transfers are silent.
pub fn describe(
    operation: Operation,
    outcome: &Result<Amount, BankError>,
    currency_symbol: &str,
) -> Option<String> {
    match outcome {
        Ok(amount) => match operation {
            Operation::MaintenanceFee => Some(format!(
                "Taxa de manutenção de {} {:.2} cobrada com sucesso.",
                currency_symbol,
                display_amount(*amount)
            )),
            Operation::MonthlyInterest => Some(format!(
                "Rendimento mensal de {} {:.2} creditado com sucesso.",
                currency_symbol,
                display_amount(*amount)
            )),
            Operation::Deposit | Operation::Withdrawal | Operation::Transfer => None,
        },
        Err(BankError::Transaction(err)) => Some(describe_rejection(operation, err)),
        Err(err) => Some(format!("Operação não realizada: {}.", err)),
    }
}

fn describe_rejection(operation: Operation, err: &TransactionError) -> String {
    match (operation, err) {
        (Operation::Deposit, TransactionError::InvalidAmount { .. }) => {
            "Valor de depósito inválido.".to_string()
        }
        (Operation::Withdrawal, TransactionError::InvalidAmount { .. }) => {
            "Valor de saque inválido.".to_string()
        }
        (Operation::Transfer, TransactionError::InvalidAmount { .. }) => {
            "Valor de transferência inválido.".to_string()
        }
        (Operation::Withdrawal, TransactionError::InsufficientFunds { .. }) => {
            "Saldo insuficiente para saque.".to_string()
        }
        (Operation::Transfer, TransactionError::InsufficientFunds { .. }) => {
            "Saldo insuficiente para transferência.".to_string()
        }
        _ => format!("Operação não realizada: {}.", err),
    }
}

/// Write the console message for an outcome to `out`, and log rejections.
pub fn report(
    out: &mut impl Write,
    operation: Operation,
    outcome: &Result<Amount, BankError>,
    currency_symbol: &str,
) -> std::io::Result<()> {
    if let Err(err) = outcome {
        tracing::warn!(%operation, error = %err, "operation rejected");
    }

    match describe(operation, outcome, currency_symbol) {
        Some(message) => writeln!(out, "{}", message),
        None => Ok(()),
    }
}
