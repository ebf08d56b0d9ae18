//! Bank-wide settings.
//!
//! There is no configuration file and no environment lookup: a `Config` is
//! built in code, starting from `Config::default()`.

use crate::ledger::{Amount, BranchCode};

use rust_decimal_macros::dec;

/// How withdrawals treat zero or negative amounts.
///
/// Deposits always reject them. Withdrawals historically only checked the
/// balance, so a withdrawal of -10 would add 10 to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    /// Only check `amount <= balance`.
    ///
    /// Transfers are not affected: they reject `amount <= 0` under either
    /// policy, since a negative transfer would credit the source.
    Permissive,

    /// Also reject `amount <= 0`, like deposits do.
    Symmetric,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Every account belongs to this single branch.
    pub branch_code: BranchCode,

    /// Prefix used when displaying money, e.g. `R$ 12.50`.
    pub currency_symbol: String,

    /// Charged to checking accounts once a month.
    pub maintenance_fee: Amount,

    /// Credited to savings accounts once a month, as a fraction (0.004 = 0.4%).
    pub monthly_interest_rate: Amount,

    pub withdrawal_policy: WithdrawalPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_code: 1,
            currency_symbol: "R$".to_string(),
            maintenance_fee: dec!(12.50),
            monthly_interest_rate: dec!(0.004),
            withdrawal_policy: WithdrawalPolicy::Permissive,
        }
    }
}

impl Config {
    pub fn with_branch_code(mut self, branch_code: BranchCode) -> Self {
        self.branch_code = branch_code;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_maintenance_fee(mut self, fee: Amount) -> Self {
        self.maintenance_fee = fee;
        self
    }

    pub fn with_monthly_interest_rate(mut self, rate: Amount) -> Self {
        self.monthly_interest_rate = rate;
        self
    }

    pub fn with_withdrawal_policy(mut self, policy: WithdrawalPolicy) -> Self {
        self.withdrawal_policy = policy;
        self
    }
}
