//! Helper functions for decoding and operand handling.
//!
//! This module provides utility functions for working with decoded values
//! and operand strings: address and hash formatting, numeric parsing with
//! unsigned big-integer semantics, and conversion of decoded Solidity
//! values into JSON parameter values.

use alloy::primitives::{B256, U256};
use alloy_dyn_abi::DynSolValue;
use serde_json::Value;
use std::str::FromStr;

/// Converts a B256 hash to its hexadecimal string representation.
pub fn b256_to_string(hash: B256) -> String {
	format!("0x{}", hex::encode(hash.as_slice()))
}

/// Normalizes an address string by removing the "0x" prefix, spaces, and
/// converting to lowercase.
pub fn normalize_address(address: &str) -> String {
	address
		.strip_prefix("0x")
		.unwrap_or(address)
		.replace(" ", "")
		.to_lowercase()
}

/// Compares two addresses for equality, ignoring case and "0x" prefixes.
pub fn are_same_address(address1: &str, address2: &str) -> bool {
	normalize_address(address1) == normalize_address(address2)
}

/// Converts a string to a U256 value.
///
/// Accepts decimal strings and 0x-prefixed hexadecimal strings.
pub fn string_to_u256(value_str: &str) -> Result<U256, String> {
	let trimmed = value_str.trim();

	if trimmed.is_empty() {
		return Err("Input string is empty".to_string());
	}

	if let Some(hex_val) = trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
	{
		if hex_val.is_empty() {
			return Err("Hex string '0x' is missing value digits".to_string());
		}
		U256::from_str_radix(hex_val, 16)
			.map_err(|e| format!("Failed to parse hex '{}': {}", hex_val, e))
	} else {
		U256::from_str(trimmed).map_err(|e| format!("Failed to parse decimal '{}': {}", trimmed, e))
	}
}

/// Formats a decoded Solidity value into a JSON parameter value.
///
/// Addresses and byte values become lowercase 0x-prefixed hex strings,
/// integers become decimal strings (so 256-bit values survive JSON),
/// booleans stay booleans, and composite values become arrays.
pub fn format_sol_value(value: &DynSolValue) -> Value {
	match value {
		DynSolValue::Address(address) => {
			Value::String(format!("0x{}", hex::encode(address.as_slice())))
		}
		DynSolValue::Bool(b) => Value::Bool(*b),
		DynSolValue::Uint(num, _) => Value::String(num.to_string()),
		DynSolValue::Int(num, _) => Value::String(num.to_string()),
		DynSolValue::FixedBytes(word, size) => {
			Value::String(format!("0x{}", hex::encode(&word.as_slice()[..*size])))
		}
		DynSolValue::Bytes(bytes) => Value::String(format!("0x{}", hex::encode(bytes))),
		DynSolValue::String(s) => Value::String(s.clone()),
		DynSolValue::Array(values) | DynSolValue::FixedArray(values) | DynSolValue::Tuple(values) => {
			Value::Array(values.iter().map(format_sol_value).collect())
		}
		other => Value::String(format!("{:?}", other)),
	}
}

/// Stringifies a JSON parameter value for operand comparison.
///
/// Returns None for null, which callers treat as a missing field.
pub fn value_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		other => Some(other.to_string()),
	}
}
