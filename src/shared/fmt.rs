//! Decimal formatting for the wire and for display.

use rust_decimal::Decimal;

/// Canonical gateway encoding: no exponent, no trailing zeros.
///
/// `0.0100` becomes `0.01`, `100.00` becomes `100`.
pub fn wire(value: &Decimal) -> String {
    value.normalize().to_string()
}

/// Format with a fixed number of decimal places, padding with zeros.
pub fn fixed(value: &Decimal, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value.round_dp(decimals))
}
