//! The demonstration session: two customers, three accounts, a few
//! operations, then statements and the customer list.

use crate::bank::Bank;
use crate::error_handler::{report, Operation};
use crate::ledger::account::AccountType;

use rust_decimal_macros::dec;
use std::io::Write;

/// Play the demonstration session, writing everything to `out`.
pub fn run(mut out: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = Bank::new("Banco Digital");
    let symbol = bank.config().currency_symbol.clone();

    let joao = bank.add_customer("João da Silva", "123.456.789-00", "joao@example.com")?;
    let maria = bank.add_customer("Maria Oliveira", "987.654.321-00", "maria@example.com")?;

    let joao_checking = bank.open_account(AccountType::Checking, joao)?;
    let joao_savings = bank.open_account(AccountType::Savings, joao)?;
    let maria_checking = bank.open_account(AccountType::Checking, maria)?;

    bank.register_account(joao_checking)?;
    bank.register_account(joao_savings)?;
    bank.register_account(maria_checking)?;

    let amount = dec!(1000);
    let outcome = bank.deposit(joao_checking, amount).map(|_| amount);
    report(&mut out, Operation::Deposit, &outcome, &symbol)?;

    let amount = dec!(300);
    let outcome = bank
        .transfer(joao_checking, amount, joao_savings)
        .map(|_| amount);
    report(&mut out, Operation::Transfer, &outcome, &symbol)?;

    let amount = dec!(1500);
    let outcome = bank.deposit(maria_checking, amount).map(|_| amount);
    report(&mut out, Operation::Deposit, &outcome, &symbol)?;

    let amount = dec!(500);
    let outcome = bank
        .transfer(maria_checking, amount, joao_checking)
        .map(|_| amount);
    report(&mut out, Operation::Transfer, &outcome, &symbol)?;

    let outcome = bank.charge_maintenance_fee(joao_checking);
    report(&mut out, Operation::MaintenanceFee, &outcome, &symbol)?;

    let outcome = bank.accrue_monthly_interest(joao_savings);
    report(&mut out, Operation::MonthlyInterest, &outcome, &symbol)?;

    writeln!(out, "\n=== Extratos ===\n")?;
    write!(out, "{}", bank.statement(joao_checking)?)?;
    writeln!(out)?;
    write!(out, "{}", bank.statement(joao_savings)?)?;
    writeln!(out)?;
    write!(out, "{}", bank.statement(maria_checking)?)?;

    writeln!(out)?;
    write!(out, "{}", bank.roster())?;

    Ok(())
}

#[test]
fn test_run() {
    let mut out = Vec::new();
    run(&mut out).expect("the demonstration should run");

    let want = "Taxa de manutenção de R$ 12.50 cobrada com sucesso.
Rendimento mensal de R$ 1.20 creditado com sucesso.

=== Extratos ===

=== Extrato Conta Corrente ===
Titular: João da Silva
Agência: 1
Número: 1
Saldo: R$ 1187.50
Taxa de manutenção mensal: R$ 12.50

=== Extrato Conta Poupança ===
Titular: João da Silva
Agência: 1
Número: 2
Saldo: R$ 301.20
Taxa de juros mensal: 0.40%

=== Extrato Conta Corrente ===
Titular: Maria Oliveira
Agência: 1
Número: 3
Saldo: R$ 1000.00
Taxa de manutenção mensal: R$ 12.50

=== Clientes do Banco Digital ===
Nome: João da Silva | CPF: 123.456.789-00
Nome: Maria Oliveira | CPF: 987.654.321-00
";
    assert_eq!(want, String::from_utf8(out).unwrap());
}
