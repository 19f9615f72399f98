//! L2 Governance Relay
//!
//! Governor of the L2 bridge and owner of the static tokens. It acts only on
//! spells sent by the L1 governance relay through the messenger.
//!
//! # Spell Execution
//! 1. The messenger relays `ReceiveFromL1` carrying `GovernancePayload::Execute`
//! 2. The relay records a pending execution and calls itself with
//!    `ExecuteSpell` as a sub-message
//! 3. `ExecuteSpell` loads the locked spell and runs every action; any failing
//!    action reverts all of them. Spells must be instantiated without a wasm
//!    admin so their code cannot change after the vote
//! 4. The reply marks the execution succeeded or failed. The messenger
//!    message stays consumed in both cases.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
