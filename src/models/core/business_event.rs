use serde::{Deserialize, Serialize};

/// Comparison operator used by conditions and cross-event rules.
///
/// `Eq`/`Ne` compare normalized strings; the ordering operators parse both
/// operands as unsigned 256-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ComparisonOperator {
	#[serde(rename = "EQ")]
	Eq,
	#[serde(rename = "NE")]
	Ne,
	#[serde(rename = "GT")]
	Gt,
	#[serde(rename = "LT")]
	Lt,
	#[serde(rename = "GE")]
	Ge,
	#[serde(rename = "LE")]
	Le,
}

/// A single condition applied to one candidate event.
///
/// Each operand is either a static literal or the name of a field to look up
/// on the candidate (`"address"` and `"origin"` are reserved dynamic
/// fields).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
	pub first_operand: String,
	pub is_first_static: bool,
	pub second_operand: String,
	pub is_second_static: bool,
	pub operator: ComparisonOperator,
}

/// One event a business-event definition requires, bound to an alias.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequirement {
	/// Decoded event name to search for
	pub event_name: String,

	/// Rule-local name the matched candidate is bound to
	pub alias: String,

	/// Conditions every candidate must satisfy, evaluated in order
	#[serde(default)]
	pub conditions: Vec<Condition>,
}

/// A rule comparing fields of two already-bound aliases.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossEventRule {
	pub first_alias: String,
	pub first_field: String,
	pub second_alias: String,
	pub second_field: String,
	pub operator: ComparisonOperator,
}

/// Maps a bound alias/field pair to an output parameter of the fused event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDefinition {
	/// Parameter name on the fused event
	pub output_name: String,

	/// Alias of the bound event to read from
	pub source_alias: String,

	/// Field to read (`"address"` and `"origin"` are reserved)
	pub source_field: String,
}

/// How requirement candidates are bound to aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
	/// Bind the first satisfying candidate per requirement, consuming it
	/// before the next requirement is evaluated. Order-dependent: if the
	/// first candidate later fails a cross-event rule the definition fails
	/// even when another candidate would have satisfied it.
	Greedy,

	/// Collect every satisfying candidate per alias, then search the full
	/// Cartesian product for the first combination satisfying all rules.
	AllCombinations,
}

/// A declarative definition of one business event.
///
/// Loaded once per network and immutable afterwards. Operands may contain
/// `${TOKEN}` placeholders that the catalog loader resolves against the
/// per-network token map before the definition is ever matched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEventDefinition {
	/// Name of the fused event this definition produces
	pub name: String,

	/// Events to find, in declared order
	pub requirements: Vec<EventRequirement>,

	/// Cross-event rules over the bound aliases
	#[serde(default)]
	pub rules: Vec<CrossEventRule>,

	/// Output parameters of the fused event
	#[serde(default)]
	pub param_defs: Vec<ParamDefinition>,

	/// Whether to search all candidate combinations instead of binding
	/// greedily
	#[serde(default)]
	pub check_all_combinations: bool,
}

impl BusinessEventDefinition {
	/// The explicit matching strategy for this definition.
	pub fn strategy(&self) -> MatchStrategy {
		if self.check_all_combinations {
			MatchStrategy::AllCombinations
		} else {
			MatchStrategy::Greedy
		}
	}
}
