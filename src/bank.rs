//! The bank: the registry of customers and accounts.
//!
//! Customers and accounts live in the bank and refer to each other by id
//! (`CustomerId`, `AccountNumber`). Opening an account and registering it are
//! two separate steps: an account can exist in the bank without being listed,
//! and the same account can be listed more than once.

use crate::config::Config;
use crate::customer::Customer;
use crate::ledger::{
    account::{Account, AccountType, Statement, TransactionError},
    sequence::{Sequence, SequenceExhausted},
    AccountNumber, Amount, CustomerId,
};

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("unknown account {0}")]
    UnknownAccount(AccountNumber),

    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerId),

    #[error("no more {0} available")]
    Exhausted(&'static str, #[source] SequenceExhausted),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

pub struct Bank {
    name: String,
    config: Config,
    customer_ids: Sequence,
    account_numbers: Sequence,
    customers: BTreeMap<CustomerId, Customer>,
    accounts: BTreeMap<AccountNumber, Account>,

    // Registration order, duplicates included.
    registry: Vec<AccountNumber>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, Config::default())
    }

    pub fn with_config(name: impl Into<String>, config: Config) -> Self {
        Self {
            name: name.into(),
            config,
            customer_ids: Sequence::new(),
            account_numbers: Sequence::new(),
            customers: BTreeMap::new(),
            accounts: BTreeMap::new(),
            registry: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        tax_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<CustomerId, BankError> {
        let id = self
            .customer_ids
            .next()
            .map_err(|err| BankError::Exhausted("customer ids", err))?;
        self.customers
            .insert(id, Customer::new(id, name, tax_id, email));
        tracing::debug!(customer_id = id, "customer added");
        Ok(id)
    }

    pub fn customer(&self, id: CustomerId) -> Result<&Customer, BankError> {
        self.customers
            .get(&id)
            .ok_or(BankError::UnknownCustomer(id))
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer, BankError> {
        self.customers
            .get_mut(&id)
            .ok_or(BankError::UnknownCustomer(id))
    }

    /// Open an empty account for an existing customer.
    /// The account isn't registered: see `register_account`.
    pub fn open_account(
        &mut self,
        account_type: AccountType,
        owner: CustomerId,
    ) -> Result<AccountNumber, BankError> {
        self.customer(owner)?;

        let account = Account::open(account_type, owner, &mut self.account_numbers, &self.config)
            .map_err(|err| BankError::Exhausted("account numbers", err))?;
        let number = account.number();
        self.accounts.insert(number, account);
        tracing::debug!(account = number, customer_id = owner, %account_type, "account opened");

        Ok(number)
    }

    /// Add an account to the bank's listing.
    /// There is no duplicate check: registering twice lists the account twice.
    pub fn register_account(&mut self, number: AccountNumber) -> Result<(), BankError> {
        self.account(number)?;
        self.registry.push(number);
        Ok(())
    }

    pub fn account(&self, number: AccountNumber) -> Result<&Account, BankError> {
        self.accounts
            .get(&number)
            .ok_or(BankError::UnknownAccount(number))
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount(number))
    }

    /// Every account in the bank, registered or not, by account number.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Registered accounts, in registration order, duplicates included.
    pub fn registered_accounts(&self) -> impl Iterator<Item = &Account> {
        self.registry
            .iter()
            .filter_map(move |number| self.accounts.get(number))
    }

    #[tracing::instrument(skip(self), err)]
    pub fn deposit(&mut self, number: AccountNumber, amount: Amount) -> Result<(), BankError> {
        Ok(self.account_mut(number)?.deposit(amount)?)
    }

    #[tracing::instrument(skip(self), err)]
    pub fn withdraw(&mut self, number: AccountNumber, amount: Amount) -> Result<(), BankError> {
        Ok(self.account_mut(number)?.withdraw(amount)?)
    }

    /// Transfer `amount` from account `from` to account `to`.
    ///
    /// Transferring to the same account checks the preconditions and leaves
    /// the balance as it was.
    #[tracing::instrument(skip(self), err)]
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        amount: Amount,
        to: AccountNumber,
    ) -> Result<(), BankError> {
        if from == to {
            return Ok(self.account(from)?.check_transfer(amount)?);
        }
        self.account(from)?;

        // Take the destination out of the map so both accounts can be borrowed mutably.
        let mut destination = self
            .accounts
            .remove(&to)
            .ok_or(BankError::UnknownAccount(to))?;
        let result = self.account_mut(from).and_then(|source| {
            source
                .transfer(amount, &mut destination)
                .map_err(BankError::from)
        });
        self.accounts.insert(to, destination);

        result
    }

    /// Charge the monthly fee of a checking account. Returns the fee charged.
    #[tracing::instrument(skip(self), err)]
    pub fn charge_maintenance_fee(&mut self, number: AccountNumber) -> Result<Amount, BankError> {
        Ok(self.account_mut(number)?.charge_maintenance_fee()?)
    }

    /// Credit a month of interest to a savings account. Returns the interest credited.
    #[tracing::instrument(skip(self), err)]
    pub fn accrue_monthly_interest(&mut self, number: AccountNumber) -> Result<Amount, BankError> {
        Ok(self.account_mut(number)?.accrue_monthly_interest()?)
    }

    pub fn statement(&self, number: AccountNumber) -> Result<Statement<'_>, BankError> {
        let account = self.account(number)?;
        let owner = self.customer(account.owner())?;

        Ok(Statement::new(account, owner, &self.config.currency_symbol))
    }

    /// The distinct owners of the registered accounts.
    ///
    /// Customers are listed once each, in the order their first account was
    /// registered.
    pub fn customers(&self) -> Vec<&Customer> {
        let mut seen = HashSet::new();

        self.registered_accounts()
            .map(Account::owner)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.customers.get(&id))
            .collect()
    }

    pub fn roster(&self) -> Roster<'_> {
        Roster {
            bank_name: &self.name,
            customers: self.customers(),
        }
    }
}

/// The printable list of a bank's customers.
///
/// ```text
/// === Clientes do Banco Digital ===
/// Nome: João da Silva | CPF: 123.456.789-00
/// ```
pub struct Roster<'a> {
    bank_name: &'a str,
    customers: Vec<&'a Customer>,
}

impl Roster<'_> {
    pub fn customers(&self) -> &[&Customer] {
        &self.customers
    }
}

impl fmt::Display for Roster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Clientes do {} ===", self.bank_name)?;
        for customer in &self.customers {
            writeln!(f, "Nome: {} | CPF: {}", customer.name(), customer.tax_id())?;
        }

        Ok(())
    }
}
