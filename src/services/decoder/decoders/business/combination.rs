//! Combinatorial search over per-alias candidate sets.
//!
//! Used only by definitions with `checkAllCombinations` set. The search
//! walks the Cartesian product of the per-alias candidate lists in
//! lexicographic order of the input lists and returns the first combination
//! for which every cross-event rule holds. Complexity is the product of the
//! candidate-list sizes; real transactions rarely have more than a handful
//! of matching logs per alias.

use itertools::Itertools;
use tracing::debug;

use crate::{
	models::{CrossEventRule, DecodedEvent},
	services::decoder::decoders::business::condition::rules_hold,
};

/// Returns the first alias binding satisfying all rules, or None.
///
/// A rule-evaluation failure (missing field, non-numeric operand) rejects
/// only the combination it occurred in.
pub(crate) fn find_matching_combination(
	events: &[DecodedEvent],
	alias_candidates: &[(String, Vec<usize>)],
	rules: &[CrossEventRule],
	origin: &str,
) -> Option<Vec<(String, usize)>> {
	alias_candidates
		.iter()
		.map(|(_, candidates)| candidates.iter().copied())
		.multi_cartesian_product()
		.find_map(|combination| {
			let bindings: Vec<(String, usize)> = alias_candidates
				.iter()
				.map(|(alias, _)| alias.clone())
				.zip(combination)
				.collect();

			match rules_hold(events, &bindings, rules, origin) {
				Ok(true) => Some(bindings),
				Ok(false) => None,
				Err(error) => {
					debug!(%error, "combination rejected");
					None
				}
			}
		})
}
