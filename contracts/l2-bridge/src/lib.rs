//! L2 Bridge - Token Registry and Static Token Coordinator
//!
//! Receives deposit and index messages from the L1 bridge through the
//! messenger, mints static tokens, and sends withdrawals and bridged rewards
//! back to L1.
//!
//! # Deposit Flow (L1 -> L2)
//! 1. The messenger relays `ReceiveFromL1` from the registered L1 bridge
//! 2. The rewards index carried by the deposit is pushed to the static token
//!    if it comes from a newer L1 block
//! 3. The static amount is minted to the L2 recipient
//!
//! # Withdraw Flow (L2 -> L1)
//! 1. A holder calls `InitiateWithdraw`; the bridge burns the static tokens
//! 2. A `Withdrawal` message carrying the static token's rewards index is
//!    sent to the L1 bridge
//!
//! # Rewards
//! - Static tokens claim through `MintRewards`; the bridge mints the L2
//!   reward token, of which it is the minter
//! - Holders bridge rewards home by sending the reward token here with
//!   `BridgeRewards`; the tokens are burned and a `Rewards` message is sent

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
