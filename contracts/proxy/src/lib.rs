//! Upgrade Proxy
//!
//! CosmWasm contracts keep their address across code upgrades, so the target
//! contract address is the stable handle users interact with. The proxy is
//! the target's wasm admin: it holds the right to migrate the target to a new
//! code id and gates that right behind its own replaceable admin.
//!
//! # Lifecycle
//! 1. Instantiate the proxy with its admin
//! 2. Instantiate the target with the proxy as wasm admin
//! 3. `Initialize` binds the target and records its current code id
//! 4. `Upgrade` migrates the target to a new code id

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
