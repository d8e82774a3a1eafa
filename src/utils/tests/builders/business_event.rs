//! Test helper utilities for business-event definition instances.

use crate::models::{
	BusinessEventDefinition, ComparisonOperator, Condition, CrossEventRule, EventRequirement,
	ParamDefinition,
};

/// Shorthand for a condition between an event field and a static literal.
pub fn field_equals(field: &str, literal: &str) -> Condition {
	Condition {
		first_operand: field.to_string(),
		is_first_static: false,
		second_operand: literal.to_string(),
		is_second_static: true,
		operator: ComparisonOperator::Eq,
	}
}

/// Shorthand for an arbitrary condition.
pub fn condition(
	first: (&str, bool),
	operator: ComparisonOperator,
	second: (&str, bool),
) -> Condition {
	Condition {
		first_operand: first.0.to_string(),
		is_first_static: first.1,
		second_operand: second.0.to_string(),
		is_second_static: second.1,
		operator,
	}
}

/// Builder for [`BusinessEventDefinition`] test instances.
#[derive(Debug, Default)]
pub struct BusinessEventDefinitionBuilder {
	name: String,
	requirements: Vec<EventRequirement>,
	rules: Vec<CrossEventRule>,
	param_defs: Vec<ParamDefinition>,
	check_all_combinations: bool,
}

impl BusinessEventDefinitionBuilder {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_string(),
			..Default::default()
		}
	}

	pub fn requirement(mut self, event_name: &str, alias: &str, conditions: Vec<Condition>) -> Self {
		self.requirements.push(EventRequirement {
			event_name: event_name.to_string(),
			alias: alias.to_string(),
			conditions,
		});
		self
	}

	pub fn rule(
		mut self,
		first: (&str, &str),
		operator: ComparisonOperator,
		second: (&str, &str),
	) -> Self {
		self.rules.push(CrossEventRule {
			first_alias: first.0.to_string(),
			first_field: first.1.to_string(),
			second_alias: second.0.to_string(),
			second_field: second.1.to_string(),
			operator,
		});
		self
	}

	pub fn param(mut self, output_name: &str, source_alias: &str, source_field: &str) -> Self {
		self.param_defs.push(ParamDefinition {
			output_name: output_name.to_string(),
			source_alias: source_alias.to_string(),
			source_field: source_field.to_string(),
		});
		self
	}

	pub fn check_all_combinations(mut self, check: bool) -> Self {
		self.check_all_combinations = check;
		self
	}

	pub fn build(self) -> BusinessEventDefinition {
		BusinessEventDefinition {
			name: self.name,
			requirements: self.requirements,
			rules: self.rules,
			param_defs: self.param_defs,
			check_all_combinations: self.check_all_combinations,
		}
	}
}
