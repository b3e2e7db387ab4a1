//! Transaction record text
//!
//! History entries are plain strings so they survive schema changes and read
//! the same way on screen and on disk. Amounts are always rendered with two
//! decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix used in every record and console message
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Render an amount with the currency prefix, e.g. `Rs.1365.00`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", CURRENCY_PREFIX, rounded)
}

pub fn created(initial_balance: Decimal) -> String {
    format!("Account created with balance: {}", format_amount(initial_balance))
}

pub fn deposited(amount: Decimal) -> String {
    format!("Deposited: {}", format_amount(amount))
}

pub fn withdrawn(amount: Decimal) -> String {
    format!("Withdrawn: {}", format_amount(amount))
}

pub fn interest_added(interest: Decimal) -> String {
    format!("Interest added: {}", format_amount(interest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(500, 0)), "Rs.500.00");
        assert_eq!(format_amount(Decimal::new(13650, 1)), "Rs.1365.00");
        assert_eq!(format_amount(Decimal::new(-1005, 3)), "Rs.-1.01");
    }

    #[test]
    fn test_record_text() {
        assert_eq!(
            created(Decimal::new(1000, 0)),
            "Account created with balance: Rs.1000.00"
        );
        assert_eq!(deposited(Decimal::new(5, 1)), "Deposited: Rs.0.50");
        assert_eq!(withdrawn(Decimal::new(200, 0)), "Withdrawn: Rs.200.00");
        assert_eq!(interest_added(Decimal::new(65, 0)), "Interest added: Rs.65.00");
    }
}
