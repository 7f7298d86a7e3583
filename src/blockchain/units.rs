//! Conversions between smallest-unit integers and human decimal strings.

use alloy::primitives::utils::{format_units, parse_units, ParseUnits};
use alloy::primitives::U256;

use crate::error::{TrackerError, TrackerResult};

/// Decimals of every supported chain's native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Format a raw amount with `decimals` places, trimming trailing zeros but
/// keeping at least one fractional digit (`1000000000000000000` → `"1.0"`).
pub fn format_amount(raw: U256, decimals: u8) -> TrackerResult<String> {
    let formatted = format_units(raw, decimals)
        .map_err(|e| TrackerError::InvalidAmount(format!("cannot format {}: {}", raw, e)))?;
    Ok(normalize(formatted))
}

/// Format a wei amount as native currency.
pub fn format_native(raw: U256) -> TrackerResult<String> {
    format_amount(raw, NATIVE_DECIMALS)
}

/// Format a raw amount given as a decimal integer string, as returned by the indexing API.
pub fn format_raw_str(raw: &str, decimals: u8) -> TrackerResult<String> {
    let value: U256 = raw
        .parse()
        .map_err(|_| TrackerError::Service(format!("malformed raw amount \"{}\"", raw)))?;
    format_amount(value, decimals)
}

/// Parse a human decimal string into the smallest unit.
pub fn parse_amount(amount: &str, decimals: u8) -> TrackerResult<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidAmount("amount is empty".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(TrackerError::InvalidAmount(format!(
            "\"{}\" is negative",
            amount
        )));
    }
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > decimals as usize {
            return Err(TrackerError::InvalidAmount(format!(
                "\"{}\" has more than {} decimal places",
                amount, decimals
            )));
        }
    }

    match parse_units(trimmed, decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(TrackerError::InvalidAmount(format!(
            "\"{}\" is negative",
            amount
        ))),
        Err(e) => Err(TrackerError::InvalidAmount(format!("\"{}\": {}", amount, e))),
    }
}

/// Parse a native-currency amount into wei.
pub fn parse_native(amount: &str) -> TrackerResult<U256> {
    parse_amount(amount, NATIVE_DECIMALS)
}

fn normalize(mut formatted: String) -> String {
    if formatted.contains('.') {
        let significant = formatted.trim_end_matches('0').len();
        formatted.truncate(significant);
        if formatted.ends_with('.') {
            formatted.push('0');
        }
    } else {
        formatted.push_str(".0");
    }
    formatted
}
