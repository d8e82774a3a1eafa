//! Error types for the decode-and-correlate engine.
//!
//! All of these errors are local, expected control-flow outcomes: they
//! decide whether a candidate, a combination or a definition attempt is
//! kept, and never escape a top-level decode call. The user-visible failure
//! mode is the "unknown transaction" fallback row, not an error.

use thiserror::Error;

/// Reasons a candidate, combination or definition attempt is rejected
/// during business-event matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
	/// A dynamic operand references a field absent from the candidate
	/// event; the candidate is excluded from the current condition match.
	#[error("field '{0}' is missing from the candidate event")]
	MissingField(String),

	/// A non-numeric operand was used with an ordering operator; same
	/// effect as a missing field.
	#[error("operand '{0}' is not an unsigned integer")]
	InvalidOperand(String),

	/// A requirement found zero qualifying candidates; the definition
	/// attempt is abandoned.
	#[error("requirement '{0}' has no qualifying candidates")]
	UnsatisfiedRequirement(String),

	/// All requirements were satisfied but no candidate combination
	/// satisfies the cross-event rules.
	#[error("no candidate combination satisfies the cross-event rules")]
	NoMatchingRule,
}

/// Failure to ABI-decode a log whose selector topic matched a catalog
/// entry. Fatal to that decode attempt only; the log is left undecoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode log data for '{signature}': {reason}")]
pub struct DecodeError {
	pub signature: String,
	pub reason: String,
}

impl DecodeError {
	pub fn log_data(signature: impl Into<String>, reason: impl Into<String>) -> Self {
		DecodeError {
			signature: signature.into(),
			reason: reason.into(),
		}
	}
}
