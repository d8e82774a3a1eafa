//! Test helper utilities for raw receipt and decoded-event instances.

use alloy::primitives::{Bytes, B256, U256};
use serde_json::Value;

use crate::models::{ClauseOutput, DecodedEvent, EventLog, EventParams, TransferLog};

/// Builds a topic carrying a left-padded address.
pub fn address_topic(address: &str) -> B256 {
	let stripped = address.strip_prefix("0x").unwrap_or(address);
	let bytes = hex::decode(stripped).expect("valid address hex");
	let mut topic = [0u8; 32];
	topic[32 - bytes.len()..].copy_from_slice(&bytes);
	B256::from(topic)
}

/// Builds a topic carrying an unsigned integer.
pub fn uint_topic(value: u64) -> B256 {
	B256::from(U256::from(value))
}

/// ABI-encodes a sequence of unsigned integers as 32-byte words.
pub fn uint_data(values: &[u64]) -> Bytes {
	let mut data = Vec::with_capacity(values.len() * 32);
	for value in values {
		data.extend_from_slice(&U256::from(*value).to_be_bytes::<32>());
	}
	Bytes::from(data)
}

/// Builder for [`EventLog`] test instances.
#[derive(Debug, Default)]
pub struct EventLogBuilder {
	address: String,
	topics: Vec<B256>,
	data: Bytes,
}

impl EventLogBuilder {
	pub fn new() -> Self {
		Self {
			address: "0x0000000000000000000000000000000000000001".to_string(),
			..Default::default()
		}
	}

	pub fn address(mut self, address: &str) -> Self {
		self.address = address.to_string();
		self
	}

	pub fn topic(mut self, topic: B256) -> Self {
		self.topics.push(topic);
		self
	}

	/// Appends a topic parsed from a 32-byte hex string.
	pub fn topic_hex(mut self, topic: &str) -> Self {
		let stripped = topic.strip_prefix("0x").unwrap_or(topic);
		let bytes = hex::decode(stripped).expect("valid topic hex");
		self.topics.push(B256::from_slice(&bytes));
		self
	}

	pub fn data(mut self, data: Bytes) -> Self {
		self.data = data;
		self
	}

	pub fn build(self) -> EventLog {
		EventLog {
			address: self.address,
			topics: self.topics,
			data: self.data,
		}
	}
}

/// Builder for [`ClauseOutput`] test instances.
#[derive(Debug, Default)]
pub struct ClauseOutputBuilder {
	contract_address: Option<String>,
	events: Vec<EventLog>,
	transfers: Vec<TransferLog>,
}

impl ClauseOutputBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contract_address(mut self, address: &str) -> Self {
		self.contract_address = Some(address.to_string());
		self
	}

	pub fn event(mut self, event: EventLog) -> Self {
		self.events.push(event);
		self
	}

	pub fn transfer(mut self, sender: &str, recipient: &str, amount: u64) -> Self {
		self.transfers.push(TransferLog {
			sender: sender.to_string(),
			recipient: recipient.to_string(),
			amount: U256::from(amount),
		});
		self
	}

	pub fn build(self) -> ClauseOutput {
		ClauseOutput {
			contract_address: self.contract_address,
			events: self.events,
			transfers: self.transfers,
		}
	}
}

/// Builder for [`DecodedEvent`] test instances.
#[derive(Debug, Default)]
pub struct DecodedEventBuilder {
	name: String,
	params: EventParams,
	address: Option<String>,
}

impl DecodedEventBuilder {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_string(),
			..Default::default()
		}
	}

	pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.params.insert(name.to_string(), value.into());
		self
	}

	pub fn address(mut self, address: &str) -> Self {
		self.address = Some(address.to_string());
		self
	}

	pub fn build(self) -> DecodedEvent {
		DecodedEvent {
			name: self.name,
			params: self.params,
			address: self.address,
		}
	}
}
