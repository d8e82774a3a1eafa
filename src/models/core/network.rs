use std::fmt;

use serde::{Deserialize, Serialize};

/// VeChainThor network discriminator.
///
/// Business-event catalogs are shared across networks and specialized per
/// network at load time; the network type selects which contract-address
/// substitutions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
	Mainnet,
	Testnet,
	Solo,
}

impl fmt::Display for NetworkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NetworkType::Mainnet => write!(f, "mainnet"),
			NetworkType::Testnet => write!(f, "testnet"),
			NetworkType::Solo => write!(f, "solo"),
		}
	}
}
