//! Business-event matching and fusion.
//!
//! A business event is a higher-level semantic action inferred by
//! correlating several low-level decoded events within one clause. The
//! matcher tries the network-specialized definitions in their fixed
//! precedence order; the first definition whose requirements, conditions
//! and cross-event rules are all satisfied consumes its matched events and
//! replaces them with one fused event carrying the extracted parameters.
//!
//! At most one fusion happens per pipeline pass: a later pass (if the
//! caller configures this decoder more than once) sees the already-fused
//! list.

mod combination;
mod condition;

use std::{collections::HashSet, sync::Arc};

use serde_json::Value;
use tracing::debug;

use crate::{
	models::{
		BusinessEventDefinition, ClauseOutput, DecodedEvent, EventParams, MatchStrategy,
	},
	repositories::BusinessEventRepository,
	services::decoder::error::MatchError,
};

use combination::find_matching_combination;
use condition::{matches_conditions, rules_hold};

/// A successful definition match: the alias binding plus the extracted
/// output parameters.
struct Fusion {
	bindings: Vec<(String, usize)>,
	params: EventParams,
}

/// Decoder that fuses correlated decoded events into business events.
#[derive(Debug, Clone)]
pub struct BusinessEventDecoder {
	repository: Arc<BusinessEventRepository>,
}

impl BusinessEventDecoder {
	pub fn new(repository: Arc<BusinessEventRepository>) -> Self {
		BusinessEventDecoder { repository }
	}

	/// Runs one fusion pass over the clause's accumulated events.
	///
	/// Definitions are tried in precedence order; the first success wins.
	/// When nothing matches the list is returned unmodified.
	pub fn decode_clause(
		&self,
		_output: &ClauseOutput,
		accumulated: Vec<DecodedEvent>,
		origin: &str,
	) -> Vec<DecodedEvent> {
		for definition in &self.repository.definitions {
			match match_definition(definition, &accumulated, origin) {
				Ok(fusion) => {
					debug!(
						definition = %definition.name,
						consumed = fusion.bindings.len(),
						"fused business event"
					);
					return apply_fusion(definition, accumulated, fusion);
				}
				Err(error) => {
					debug!(definition = %definition.name, %error, "definition did not match");
				}
			}
		}

		accumulated
	}
}

/// Attempts to match one definition against the event list.
fn match_definition(
	definition: &BusinessEventDefinition,
	events: &[DecodedEvent],
	origin: &str,
) -> Result<Fusion, MatchError> {
	let bindings = match definition.strategy() {
		MatchStrategy::Greedy => match_greedy(definition, events, origin)?,
		MatchStrategy::AllCombinations => match_all_combinations(definition, events, origin)?,
	};
	let params = extract_params(definition, events, &bindings, origin)?;

	Ok(Fusion { bindings, params })
}

/// Greedy matching: each requirement binds its first satisfying candidate
/// (in pool order) and consumes it before the next requirement runs, then
/// the cross-event rules are evaluated once against that single binding.
fn match_greedy(
	definition: &BusinessEventDefinition,
	events: &[DecodedEvent],
	origin: &str,
) -> Result<Vec<(String, usize)>, MatchError> {
	let mut pool: Vec<usize> = (0..events.len()).collect();
	let mut bindings = Vec::with_capacity(definition.requirements.len());

	for requirement in &definition.requirements {
		let named: Vec<usize> = pool
			.iter()
			.copied()
			.filter(|&index| events[index].name == requirement.event_name)
			.collect();
		let matching = matches_conditions(events, &named, &requirement.conditions, origin);

		let Some(&first) = matching.first() else {
			return Err(MatchError::UnsatisfiedRequirement(requirement.alias.clone()));
		};

		bindings.push((requirement.alias.clone(), first));
		pool.retain(|&index| index != first);
	}

	if rules_hold(events, &bindings, &definition.rules, origin)? {
		Ok(bindings)
	} else {
		Err(MatchError::NoMatchingRule)
	}
}

/// Exhaustive matching: collect the full satisfying candidate set per alias
/// without consuming anything, then search the Cartesian product for the
/// first combination satisfying all rules.
fn match_all_combinations(
	definition: &BusinessEventDefinition,
	events: &[DecodedEvent],
	origin: &str,
) -> Result<Vec<(String, usize)>, MatchError> {
	let all: Vec<usize> = (0..events.len()).collect();
	let mut alias_candidates = Vec::with_capacity(definition.requirements.len());

	for requirement in &definition.requirements {
		let named: Vec<usize> = all
			.iter()
			.copied()
			.filter(|&index| events[index].name == requirement.event_name)
			.collect();
		let matching = matches_conditions(events, &named, &requirement.conditions, origin);

		if matching.is_empty() {
			return Err(MatchError::UnsatisfiedRequirement(requirement.alias.clone()));
		}

		alias_candidates.push((requirement.alias.clone(), matching));
	}

	find_matching_combination(events, &alias_candidates, &definition.rules, origin)
		.ok_or(MatchError::NoMatchingRule)
}

/// Resolves the definition's output parameters against the bound aliases.
///
/// Unlike condition operands, extracted values keep their original casing
/// and type: they flow into the result rows the UI renders.
fn extract_params(
	definition: &BusinessEventDefinition,
	events: &[DecodedEvent],
	bindings: &[(String, usize)],
	origin: &str,
) -> Result<EventParams, MatchError> {
	let mut params = EventParams::new();

	for param in &definition.param_defs {
		let (_, index) = bindings
			.iter()
			.find(|(alias, _)| *alias == param.source_alias)
			.ok_or_else(|| MatchError::MissingField(param.source_alias.clone()))?;
		let event = &events[*index];

		let value = match param.source_field.as_str() {
			"address" => Value::String(event.address.clone().unwrap_or_default()),
			"origin" => Value::String(origin.to_string()),
			field => event
				.params
				.get(field)
				.filter(|value| !value.is_null())
				.cloned()
				.ok_or_else(|| MatchError::MissingField(field.to_string()))?,
		};

		params.insert(param.output_name.clone(), value);
	}

	Ok(params)
}

/// Removes exactly the consumed events and appends the fused event.
fn apply_fusion(
	definition: &BusinessEventDefinition,
	events: Vec<DecodedEvent>,
	fusion: Fusion,
) -> Vec<DecodedEvent> {
	let consumed: HashSet<usize> = fusion.bindings.iter().map(|(_, index)| *index).collect();

	let mut remaining: Vec<DecodedEvent> = events
		.into_iter()
		.enumerate()
		.filter(|(index, _)| !consumed.contains(index))
		.map(|(_, event)| event)
		.collect();

	remaining.push(DecodedEvent::new(
		definition.name.clone(),
		fusion.params,
		None,
	));

	remaining
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		models::{ComparisonOperator, NetworkType},
		repositories::TokenMap,
		utils::tests::builders::{
			business_event::{field_equals, BusinessEventDefinitionBuilder},
			receipt::DecodedEventBuilder,
		},
	};
	use serde_json::json;

	const ORIGIN: &str = "0x00000000000000000000000000000000000000ff";
	const TRANSFER: &str = "Transfer(indexed address,indexed address,uint256)";
	const REWARD: &str =
		"RewardDistributed(uint256,indexed bytes32,indexed address,string,indexed address)";

	fn reward_event(app_id: &str, receiver: &str, amount: &str) -> DecodedEvent {
		DecodedEventBuilder::new(REWARD)
			.param("appId", app_id)
			.param("receiver", receiver)
			.param("amount", amount)
			.param("roundId", "12")
			.address("0xPoolContract")
			.build()
	}

	fn transfer_event(from: &str, to: &str, value: &str) -> DecodedEvent {
		DecodedEventBuilder::new(TRANSFER)
			.param("from", from)
			.param("to", to)
			.param("value", value)
			.address("0xTokenContract")
			.build()
	}

	fn claim_reward_definition() -> BusinessEventDefinition {
		BusinessEventDefinitionBuilder::new("B3TR_CLAIM_REWARD")
			.requirement(REWARD, "reward", vec![field_equals("appId", "0xapp")])
			.requirement(TRANSFER, "transfer", vec![])
			.rule(
				("transfer", "to"),
				ComparisonOperator::Eq,
				("reward", "receiver"),
			)
			.param("value", "transfer", "value")
			.param("roundId", "reward", "roundId")
			.build()
	}

	fn decoder(definitions: Vec<BusinessEventDefinition>) -> BusinessEventDecoder {
		BusinessEventDecoder::new(Arc::new(BusinessEventRepository::new_with_definitions(
			definitions,
			NetworkType::Mainnet,
			&TokenMap::new(),
		)))
	}

	#[test]
	fn test_fusion_consumes_matched_events() {
		let events = vec![
			reward_event("0xApp", "0xBB", "500"),
			transfer_event("0xPool", "0xbb", "500"),
			transfer_event("0xcc", "0xdd", "1"),
		];

		let fused = decoder(vec![claim_reward_definition()]).decode_clause(
			&ClauseOutput::default(),
			events,
			ORIGIN,
		);

		// The unrelated transfer survives, the two matched events fuse
		assert_eq!(fused.len(), 2);
		assert_eq!(fused[0].name, TRANSFER);
		assert_eq!(fused[0].params["from"], json!("0xcc"));
		assert_eq!(fused[1].name, "B3TR_CLAIM_REWARD");
		assert_eq!(fused[1].params["value"], json!("500"));
		assert_eq!(fused[1].params["roundId"], json!("12"));
		assert!(fused[1].address.is_none());
	}

	#[test]
	fn test_unsatisfied_requirement_leaves_list_unmodified() {
		let events = vec![transfer_event("0xPool", "0xbb", "500")];

		let result = decoder(vec![claim_reward_definition()]).decode_clause(
			&ClauseOutput::default(),
			events.clone(),
			ORIGIN,
		);

		assert_eq!(result, events);
	}

	#[test]
	fn test_failed_condition_leaves_list_unmodified() {
		let events = vec![
			reward_event("0xOtherApp", "0xbb", "500"),
			transfer_event("0xPool", "0xbb", "500"),
		];

		let result = decoder(vec![claim_reward_definition()]).decode_clause(
			&ClauseOutput::default(),
			events.clone(),
			ORIGIN,
		);

		assert_eq!(result, events);
	}

	#[test]
	fn test_greedy_binds_first_candidate_even_when_later_would_match() {
		// The first transfer in pool order fails the cross-event rule while
		// the second would satisfy it: the greedy strategy must fail.
		let events = vec![
			reward_event("0xapp", "0xbb", "500"),
			transfer_event("0xPool", "0xother", "500"),
			transfer_event("0xPool", "0xbb", "500"),
		];

		let result = decoder(vec![claim_reward_definition()]).decode_clause(
			&ClauseOutput::default(),
			events.clone(),
			ORIGIN,
		);

		assert_eq!(result, events);
	}

	#[test]
	fn test_all_combinations_finds_later_candidate() {
		let mut definition = claim_reward_definition();
		definition.check_all_combinations = true;

		let events = vec![
			reward_event("0xapp", "0xbb", "500"),
			transfer_event("0xPool", "0xother", "500"),
			transfer_event("0xPool", "0xbb", "500"),
		];

		let fused =
			decoder(vec![definition]).decode_clause(&ClauseOutput::default(), events, ORIGIN);

		assert_eq!(fused.len(), 2);
		assert_eq!(fused[0].name, TRANSFER);
		assert_eq!(fused[0].params["to"], json!("0xother"));
		assert_eq!(fused[1].name, "B3TR_CLAIM_REWARD");
	}

	#[test]
	fn test_definitions_tried_in_precedence_order() {
		// Both definitions would match a bare transfer; the repository
		// orders B3TR_CLAIM_REWARD ahead of CUSTOM_EVENT.
		let broad = BusinessEventDefinitionBuilder::new("CUSTOM_EVENT")
			.requirement(TRANSFER, "transfer", vec![])
			.build();
		let claim = BusinessEventDefinitionBuilder::new("B3TR_CLAIM_REWARD")
			.requirement(TRANSFER, "transfer", vec![])
			.build();

		let fused = decoder(vec![broad, claim]).decode_clause(
			&ClauseOutput::default(),
			vec![transfer_event("0xaa", "0xbb", "1")],
			ORIGIN,
		);

		assert_eq!(fused.len(), 1);
		assert_eq!(fused[0].name, "B3TR_CLAIM_REWARD");
	}

	#[test]
	fn test_single_fusion_per_pass() {
		let definition = BusinessEventDefinitionBuilder::new("CUSTOM_EVENT")
			.requirement(TRANSFER, "transfer", vec![])
			.build();

		let fused = decoder(vec![definition]).decode_clause(
			&ClauseOutput::default(),
			vec![
				transfer_event("0xaa", "0xbb", "1"),
				transfer_event("0xcc", "0xdd", "2"),
			],
			ORIGIN,
		);

		// Only the first transfer is consumed in this pass
		assert_eq!(fused.len(), 2);
		assert_eq!(fused[0].name, TRANSFER);
		assert_eq!(fused[1].name, "CUSTOM_EVENT");
	}

	#[test]
	fn test_missing_output_param_fails_definition() {
		let definition = BusinessEventDefinitionBuilder::new("CUSTOM_EVENT")
			.requirement(TRANSFER, "transfer", vec![])
			.param("tokenId", "transfer", "tokenId")
			.build();

		let events = vec![transfer_event("0xaa", "0xbb", "1")];
		let result =
			decoder(vec![definition]).decode_clause(&ClauseOutput::default(), events.clone(), ORIGIN);

		assert_eq!(result, events);
	}

	#[test]
	fn test_origin_param_extraction() {
		let definition = BusinessEventDefinitionBuilder::new("CUSTOM_EVENT")
			.requirement(TRANSFER, "transfer", vec![])
			.param("signer", "transfer", "origin")
			.param("token", "transfer", "address")
			.build();

		let fused = decoder(vec![definition]).decode_clause(
			&ClauseOutput::default(),
			vec![transfer_event("0xaa", "0xbb", "1")],
			ORIGIN,
		);

		assert_eq!(fused[0].params["signer"], json!(ORIGIN));
		assert_eq!(fused[0].params["token"], json!("0xTokenContract"));
	}
}
