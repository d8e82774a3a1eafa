//! Constants used across the crate.

/// Sentinel name for clauses whose logs no decoder recognized.
///
/// The activity UI maps this name to its generic "unknown transaction"
/// presentation; the emitting address is preserved on the row so the UI can
/// still label the contract.
pub const UNKNOWN_EVENT_NAME: &str = "___INTERNAL_UNKNOWN___";

/// Synthetic signature assigned to native VET transfer pseudo-events.
pub const VET_TRANSFER_SIGNATURE: &str = "VET_TRANSFER(address,address,uint256)";

/// Default directory holding JSON ABI signature catalogs.
pub const DEFAULT_SIGNATURES_DIR: &str = "config/signatures";

/// Default directory holding business-event definitions.
pub const DEFAULT_BUSINESS_EVENTS_DIR: &str = "config/business_events";

/// Fixed precedence of business-event definitions.
///
/// Definitions are matched in this order; the first match wins, so more
/// specific definitions (swap legs, reward claims) must come before broader
/// ones. Definitions not listed here keep their load order after all listed
/// ones.
pub const DEFAULT_PRECEDENCE: &[&str] = &[
	"B3TR_SWAP_B3TR_TO_VOT3",
	"B3TR_SWAP_VOT3_TO_B3TR",
	"B3TR_CLAIM_REWARD",
	"B3TR_PROPOSAL_VOTE",
	"B3TR_XALLOCATION_VOTE",
	"B3TR_PROPOSAL_SUPPORT",
	"STARGATE_STAKE",
	"STARGATE_UNSTAKE",
	"STARGATE_CLAIM_REWARDS_BASE",
	"STARGATE_CLAIM_REWARDS_DELEGATE",
	"STARGATE_DELEGATE",
	"STARGATE_UNDELEGATE",
	"TOKEN_SWAP",
	"NFT_SALE",
];
