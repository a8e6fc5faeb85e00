//! Token amount normalization and unit conversion.
//!
//! Amounts arrive as decimal strings (config, aggregator JSON) and as
//! `U256` (contract reads). Both are normalized to `U256` before any
//! comparison. Display conversion uses `rust_decimal` so that fee and
//! balance figures never pass through a lossy float.

use alloy::primitives::U256;
use rust_decimal::Decimal;

use super::error::YieldError;

/// Decimals of the native gas token on Gnosis (xDAI) and Polygon (POL).
pub const NATIVE_DECIMALS: u8 = 18;

/// Decimals used when printing gas prices in gwei.
pub const GWEI_DECIMALS: u8 = 9;

/// Parse an unsigned integer amount given as a decimal or `0x` hex string.
///
/// Surrounding whitespace is ignored. Anything but plain digits is
/// rejected, including signs, separators, fractions and exponents:
/// on-chain amounts are always integers in base units.
pub fn parse_amount(input: &str) -> Result<U256, YieldError> {
    let invalid = || YieldError::InvalidAmount(input.to_string());
    let trimmed = input.trim();

    let (digits, radix) = match trimmed.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    U256::from_str_radix(digits, u64::from(radix)).map_err(|_| invalid())
}

/// Whether an approval must be sent before moving `required`.
///
/// Equality is sufficient: the token contract lets a spender move up to
/// and including the allowance.
pub fn approval_needed(current_allowance: U256, required: U256) -> bool {
    current_allowance < required
}

/// Convert a raw base-unit amount into display units.
///
/// Fails with `AmountOverflow` when the value exceeds the 96-bit
/// mantissa of `Decimal` or `decimals` exceeds its 28-digit scale.
pub fn to_display_units(raw: U256, decimals: u8) -> Result<Decimal, YieldError> {
    let value = i128::try_from(raw).map_err(|_| YieldError::AmountOverflow)?;
    Decimal::try_from_i128_with_scale(value, u32::from(decimals))
        .map(|d| d.normalize())
        .map_err(|_| YieldError::AmountOverflow)
}

/// Convert a wei figure into the chain's native display unit (÷10^18).
pub fn wei_to_native(wei: u128) -> Result<Decimal, YieldError> {
    to_display_units(U256::from(wei), NATIVE_DECIMALS)
}

/// Convert a wei gas price into gwei (÷10^9).
pub fn wei_to_gwei(wei: u128) -> Result<Decimal, YieldError> {
    to_display_units(U256::from(wei), GWEI_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_and_hex() {
        let one = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(parse_amount("1000000000000000000").unwrap(), one);
        assert_eq!(parse_amount(" 0xde0b6b3a7640000 ").unwrap(), one);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "  ", "-1", "+5", "1.5", "1e18", "abc", "1_000", "0x", "0x_ff", "1 000"] {
            assert!(parse_amount(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_approval_needed_boundaries() {
        let amount = U256::from(1_000_000_000_000_000_000u128);
        assert!(approval_needed(U256::ZERO, amount));
        assert!(approval_needed(amount - U256::from(1), amount));
        assert!(!approval_needed(amount, amount));
        assert!(!approval_needed(amount * U256::from(2), amount));
    }

    #[test]
    fn test_display_units() {
        let raw = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(to_display_units(raw, 18).unwrap(), dec!(1.5));
        assert_eq!(to_display_units(U256::from(250u64), 2).unwrap(), dec!(2.5));
        assert_eq!(to_display_units(U256::ZERO, 18).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_display_units_overflow() {
        assert!(matches!(
            to_display_units(U256::MAX, 18),
            Err(YieldError::AmountOverflow)
        ));
        assert!(matches!(
            to_display_units(U256::from(1u64), 40),
            Err(YieldError::AmountOverflow)
        ));
    }

    #[test]
    fn test_fee_conversions() {
        // 1_220_582 gas at 278.5 gwei
        let fee_wei = 1_220_582u128 * 278_500_000_000u128;
        assert_eq!(wei_to_native(fee_wei).unwrap(), dec!(0.339932087));
        assert_eq!(wei_to_gwei(278_500_000_000).unwrap(), dec!(278.5));
    }
}
