//! Business-event catalog repository implementation.
//!
//! This module provides loading and per-network specialization of the
//! business-event rule catalog. Specialization happens once, at load time:
//! `${TOKEN}` placeholders in condition operands are resolved against the
//! network's token map, and the definitions are sorted into a fixed
//! precedence order so rule evaluation is repeatable across runs. The
//! repository is immutable afterwards.

use std::{collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{
	models::{BusinessEventDefinition, ConfigLoader, NetworkType},
	repositories::error::RepositoryError,
	utils::DEFAULT_PRECEDENCE,
};

/// Per-network `token name -> contract address` substitution map.
pub type TokenMap = HashMap<String, String>;

lazy_static! {
	/// An operand is a placeholder only when the whole string is `${NAME}`
	static ref PLACEHOLDER: Regex = Regex::new(r"^\$\{(\w+)\}$").expect("valid placeholder regex");

	/// Precedence rank by definition name; unlisted names sort after all
	/// listed ones, keeping their load order
	static ref PRECEDENCE_RANK: HashMap<&'static str, usize> = DEFAULT_PRECEDENCE
		.iter()
		.enumerate()
		.map(|(rank, name)| (*name, rank))
		.collect();
}

/// Resolves one operand against the token map.
///
/// Lookup order: the network-qualified key (`NAME_mainnet`), then the bare
/// key, then the placeholder name itself as a last resort so an unresolved
/// operand stays visible instead of silently matching everything.
fn substitute_operand(operand: &str, network: NetworkType, tokens: &TokenMap) -> String {
	let Some(captures) = PLACEHOLDER.captures(operand) else {
		return operand.to_string();
	};
	let token = &captures[1];

	tokens
		.get(&format!("{}_{}", token, network))
		.or_else(|| tokens.get(token))
		.cloned()
		.unwrap_or_else(|| token.to_string())
}

/// Produces the network-specialized copy of one definition.
fn substitute_definition(
	mut definition: BusinessEventDefinition,
	network: NetworkType,
	tokens: &TokenMap,
) -> BusinessEventDefinition {
	for requirement in &mut definition.requirements {
		for condition in &mut requirement.conditions {
			condition.first_operand = substitute_operand(&condition.first_operand, network, tokens);
			condition.second_operand =
				substitute_operand(&condition.second_operand, network, tokens);
		}
	}
	definition
}

/// Repository for storing network-specialized business-event definitions
#[derive(Debug, Clone, Default)]
pub struct BusinessEventRepository {
	/// Definitions in precedence order
	pub definitions: Vec<BusinessEventDefinition>,
}

impl BusinessEventRepository {
	/// Create a new business-event repository from the given path
	///
	/// Loads all definitions from JSON files in the specified directory (or
	/// the default business-events directory if None is provided),
	/// specialized for `network`.
	pub async fn new(
		network: NetworkType,
		tokens: &TokenMap,
		path: Option<&Path>,
	) -> Result<Self, RepositoryError> {
		let definitions = Self::load_all(network, tokens, path).await?;
		Ok(BusinessEventRepository { definitions })
	}

	/// Create a repository from in-memory definition templates
	///
	/// Applies the same specialization as the file-based constructor:
	/// placeholder substitution followed by precedence ordering.
	pub fn new_with_definitions(
		definitions: Vec<BusinessEventDefinition>,
		network: NetworkType,
		tokens: &TokenMap,
	) -> Self {
		let mut definitions: Vec<BusinessEventDefinition> = definitions
			.into_iter()
			.map(|definition| substitute_definition(definition, network, tokens))
			.collect();
		sort_by_precedence(&mut definitions);

		BusinessEventRepository { definitions }
	}

	/// Load, specialize and order all definitions from the given path
	pub async fn load_all(
		network: NetworkType,
		tokens: &TokenMap,
		path: Option<&Path>,
	) -> Result<Vec<BusinessEventDefinition>, RepositoryError> {
		let templates = BusinessEventDefinition::load_all(path).await?;

		let mut definitions: Vec<BusinessEventDefinition> = templates
			.into_iter()
			.map(|(_, definition)| substitute_definition(definition, network, tokens))
			.collect();
		sort_by_precedence(&mut definitions);

		Ok(definitions)
	}
}

/// Sorts definitions into the fixed precedence order.
///
/// The sort is stable: definitions missing from the precedence table keep
/// their relative load order after all listed ones.
fn sort_by_precedence(definitions: &mut [BusinessEventDefinition]) {
	definitions.sort_by_key(|definition| {
		PRECEDENCE_RANK
			.get(definition.name.as_str())
			.copied()
			.unwrap_or(usize::MAX)
	});
}

/// Interface for business-event repository implementations
#[async_trait]
pub trait BusinessEventRepositoryTrait: Clone {
	/// Create a new repository from the given path, specialized for a
	/// network
	async fn new(
		network: NetworkType,
		tokens: &TokenMap,
		path: Option<&Path>,
	) -> Result<Self, RepositoryError>
	where
		Self: Sized;

	/// Get a specific definition by name
	fn get(&self, name: &str) -> Option<&BusinessEventDefinition>;

	/// Get all definitions in precedence order
	fn get_all(&self) -> Vec<BusinessEventDefinition>;
}

#[async_trait]
impl BusinessEventRepositoryTrait for BusinessEventRepository {
	async fn new(
		network: NetworkType,
		tokens: &TokenMap,
		path: Option<&Path>,
	) -> Result<Self, RepositoryError> {
		BusinessEventRepository::new(network, tokens, path).await
	}

	fn get(&self, name: &str) -> Option<&BusinessEventDefinition> {
		self.definitions
			.iter()
			.find(|definition| definition.name == name)
	}

	fn get_all(&self) -> Vec<BusinessEventDefinition> {
		self.definitions.clone()
	}
}

/// Service layer for business-event repository operations
#[derive(Debug, Clone)]
pub struct BusinessEventService<T: BusinessEventRepositoryTrait> {
	repository: Arc<T>,
}

impl<T: BusinessEventRepositoryTrait> BusinessEventService<T> {
	/// Create a new business-event service with the default repository
	/// implementation
	pub async fn new(
		network: NetworkType,
		tokens: &TokenMap,
		path: Option<&Path>,
	) -> Result<BusinessEventService<BusinessEventRepository>, RepositoryError> {
		let repository = BusinessEventRepository::new(network, tokens, path).await?;
		Ok(BusinessEventService {
			repository: Arc::new(repository),
		})
	}

	/// Create a new business-event service with a custom repository
	/// implementation
	pub fn new_with_repository(repository: T) -> Self {
		BusinessEventService {
			repository: Arc::new(repository),
		}
	}

	/// Get a specific definition by name
	pub fn get(&self, name: &str) -> Option<&BusinessEventDefinition> {
		self.repository.get(name)
	}

	/// Get all definitions in precedence order
	pub fn get_all(&self) -> Vec<BusinessEventDefinition> {
		self.repository.get_all()
	}

	/// Shared handle to the underlying repository
	pub fn repository(&self) -> Arc<T> {
		self.repository.clone()
	}
}
