//! L1 Governance Relay
//!
//! The L1 executor (a governance timelock or multisig) hands spell addresses
//! to this contract, which forwards them to the L2 governance relay through
//! the messenger. The L2 relay only accepts spells sent from here.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
