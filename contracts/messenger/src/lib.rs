//! Cross-Domain Messenger
//!
//! Local stand-in for the L1 <-> L2 transport. Messages are stored when sent
//! and become consumable once `finality_delay_blocks` have passed.
//!
//! # L1 -> L2
//! 1. An L1 contract calls `SendMessageToL2` and receives a nonce
//! 2. After finality, any relayer calls `RelayMessageToL2`, which marks the
//!    message consumed and invokes `ReceiveFromL1` on the L2 recipient in the
//!    same transaction
//! 3. The sender may instead `StartL1ToL2MessageCancellation` and, after
//!    `cancellation_delay_seconds`, `CancelL1ToL2Message`
//!
//! Messages from one sender to one recipient are relayed in send order. A
//! message that cannot be delivered holds up the ones after it until it is
//! delivered or cancelled.
//!
//! Relay and cancellation race on the same stored status: whichever
//! transaction commits first wins and the other fails.
//!
//! # L2 -> L1
//! 1. An L2 contract calls `SendMessageToL1`
//! 2. After finality, the addressed L1 contract calls `ConsumeMessageFromL2`

pub mod contract;
pub mod error;
pub mod hash;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
