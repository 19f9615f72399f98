//! Static Token - Non-Rebasing L2 Representation of a Yield-Bearing L1 Token
//!
//! Balances only change through explicit mint, burn and transfer. Yield keeps
//! accruing on L1; on L2 holders accrue a separate reward stream through a
//! global rewards index that only the bridge can push.
//!
//! # Rewards
//! - The index is a wad-scaled accumulator paired with the L1 block it was
//!   taken at; pushes must come from a strictly newer block and never lower
//!   the index
//! - Every balance change first settles the holder's accrual at the old
//!   balance: `unclaimed += wadMul(balance, index - userIndex)`
//! - `ClaimRewards` pays the settled amount through the bridge, which mints
//!   the L2 reward token

pub mod contract;
pub mod error;
pub mod msg;
pub mod rewards;
pub mod state;

pub use crate::error::ContractError;
