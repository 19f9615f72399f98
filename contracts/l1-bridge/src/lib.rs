//! L1 Bridge - Deposit Ledger for Yield-Bearing Tokens
//!
//! Holds the yield-bearing tokens deposited on L1 and tells the L2 bridge how
//! many static tokens to mint for them.
//!
//! # Deposit Flow (L1 -> L2)
//! 1. A user sends the yield-bearing token (or its underlying asset) with
//!    `ReceiveMsg::Deposit`
//! 2. The per-token ceiling is checked against the ledger balance
//! 3. The amount is converted to a static amount at the current liquidity
//!    index and a `Deposit` message carrying the L1 rewards index is sent
//!
//! # Cancellation
//! A deposit the L2 side has not consumed can be recovered by its depositor
//! with `StartDepositCancellation` followed, after the messenger's delay, by
//! `CancelDeposit`. The refund is paid in the asset the deposit came in. If
//! L2 consumes the deposit first, `ClearDepositCancellation` drops the stale
//! entry.
//!
//! # Withdraw Flow (L2 -> L1)
//! `Withdraw` consumes the finalized L2 message and releases the static amount
//! at the current liquidity index, as the yield-bearing token or the
//! underlying asset.
//!
//! # Rewards
//! `ReceiveRewards` pays out reward tokens burned on L2, claiming from the
//! incentives controller when the bridge's own balance is short.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod querier;
mod query;
pub mod rewards;
pub mod state;

pub use crate::error::ContractError;
