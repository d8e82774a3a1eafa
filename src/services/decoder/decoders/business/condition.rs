//! Operand resolution, operator evaluation and condition matching.
//!
//! Conditions compare two operands per candidate event. An operand is
//! either a static literal or a dynamic field lookup; `"address"` and
//! `"origin"` are reserved dynamic fields resolving to the candidate's
//! emitting address and the transaction origin. All comparisons are
//! case-insensitive on trimmed strings; ordering operators compare the
//! operands as unsigned 256-bit integers.

use tracing::debug;

use crate::{
	models::{ComparisonOperator, Condition, CrossEventRule, DecodedEvent},
	services::decoder::{
		error::MatchError,
		helpers::{string_to_u256, value_to_string},
	},
};

/// Resolves a dynamic field on a candidate event to its raw string value.
pub(crate) fn resolve_field(
	field: &str,
	event: &DecodedEvent,
	origin: &str,
) -> Result<String, MatchError> {
	match field {
		"address" => Ok(event.address.clone().unwrap_or_default()),
		"origin" => Ok(origin.to_string()),
		_ => event
			.params
			.get(field)
			.and_then(value_to_string)
			.ok_or_else(|| MatchError::MissingField(field.to_string())),
	}
}

/// Resolves one condition operand to its normalized comparison form.
pub(crate) fn resolve_operand(
	operand: &str,
	is_static: bool,
	event: &DecodedEvent,
	origin: &str,
) -> Result<String, MatchError> {
	if is_static {
		return Ok(operand.trim().to_lowercase());
	}

	resolve_field(operand, event, origin).map(|value| value.trim().to_lowercase())
}

/// Evaluates one comparison operator over two resolved operands.
pub(crate) fn evaluate_operator(
	operator: ComparisonOperator,
	first: &str,
	second: &str,
) -> Result<bool, MatchError> {
	match operator {
		ComparisonOperator::Eq => Ok(first == second),
		ComparisonOperator::Ne => Ok(first != second),
		_ => {
			let first_value = string_to_u256(first)
				.map_err(|_| MatchError::InvalidOperand(first.to_string()))?;
			let second_value = string_to_u256(second)
				.map_err(|_| MatchError::InvalidOperand(second.to_string()))?;

			Ok(match operator {
				ComparisonOperator::Gt => first_value > second_value,
				ComparisonOperator::Lt => first_value < second_value,
				ComparisonOperator::Ge => first_value >= second_value,
				ComparisonOperator::Le => first_value <= second_value,
				ComparisonOperator::Eq | ComparisonOperator::Ne => unreachable!(),
			})
		}
	}
}

/// Evaluates one condition against one candidate event.
pub(crate) fn evaluate_condition(
	condition: &Condition,
	event: &DecodedEvent,
	origin: &str,
) -> Result<bool, MatchError> {
	let first = resolve_operand(
		&condition.first_operand,
		condition.is_first_static,
		event,
		origin,
	)?;
	let second = resolve_operand(
		&condition.second_operand,
		condition.is_second_static,
		event,
		origin,
	)?;

	evaluate_operator(condition.operator, &first, &second)
}

/// Filters candidate indices down to those satisfying every condition.
///
/// A resolution or parse failure excludes the candidate from this match
/// without failing the caller.
pub(crate) fn matches_conditions(
	events: &[DecodedEvent],
	candidates: &[usize],
	conditions: &[Condition],
	origin: &str,
) -> Vec<usize> {
	candidates
		.iter()
		.copied()
		.filter(|&index| {
			conditions.iter().all(|condition| {
				match evaluate_condition(condition, &events[index], origin) {
					Ok(holds) => holds,
					Err(error) => {
						debug!(candidate = %events[index].name, %error, "candidate excluded");
						false
					}
				}
			})
		})
		.collect()
}

/// Evaluates every cross-event rule against one alias binding.
pub(crate) fn rules_hold(
	events: &[DecodedEvent],
	bindings: &[(String, usize)],
	rules: &[CrossEventRule],
	origin: &str,
) -> Result<bool, MatchError> {
	for rule in rules {
		let first = bound_field(events, bindings, &rule.first_alias, &rule.first_field, origin)?;
		let second = bound_field(
			events,
			bindings,
			&rule.second_alias,
			&rule.second_field,
			origin,
		)?;

		if !evaluate_operator(rule.operator, &first, &second)? {
			return Ok(false);
		}
	}

	Ok(true)
}

fn bound_field(
	events: &[DecodedEvent],
	bindings: &[(String, usize)],
	alias: &str,
	field: &str,
	origin: &str,
) -> Result<String, MatchError> {
	let (_, index) = bindings
		.iter()
		.find(|(bound_alias, _)| bound_alias == alias)
		.ok_or_else(|| MatchError::MissingField(alias.to_string()))?;

	resolve_field(field, &events[*index], origin).map(|value| value.trim().to_lowercase())
}
