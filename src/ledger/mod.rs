pub mod account;
pub mod sequence;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the account registry:
// (1) accounts: BTreeMap<u32, Account>
// (2) accounts: BTreeMap<AccountNumber, Account>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountNumber = u32;
pub type BranchCode = u16;
pub type CustomerId = u32;

// Money goes through a decimal library instead of f32/f64, so that
// 1200 - 12.50 is exactly 1187.50.
pub type Amount = rust_decimal::Decimal;

/// Number of decimal places shown on statements and console messages.
pub const DISPLAY_PRECISION: u32 = 2;

/// Round an amount the way it is displayed: 2 decimal places, half away from zero.
pub fn display_amount(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(
        DISPLAY_PRECISION,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

#[test]
fn test_display_amount() {
    use rust_decimal_macros::dec;

    for (raw_amount, want) in vec![
        (dec!(1187.5), "1187.50"),
        (dec!(1.200), "1.20"),
        (dec!(0.125), "0.13"),
        (dec!(-12.5), "-12.50"),
        (dec!(0), "0.00"),
    ] {
        assert_eq!(want, format!("{:.2}", display_amount(raw_amount)));
    }
}
