//! Spell - Governance Payload Contract
//!
//! A spell holds the administrative actions one governance decision applies on
//! L2. Its creator drafts the action list and locks it; the L1 governance
//! relay then sends the spell's address across, and the L2 governance relay
//! reads the locked actions and executes them with its own authority.
//!
//! Instantiate spells without a wasm admin; the L2 relay refuses any spell
//! that could be migrated.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
