//! Execute handlers for the L2 bridge contract.
//!
//! - `incoming` - deposits and index updates delivered from L1
//! - `outgoing` - withdrawals and reward bridging to L1
//! - `rewards` - reward token minting for static token claims
//! - `governance` - token mappings and wiring

mod governance;
mod incoming;
mod outgoing;
mod rewards;

pub use governance::*;
pub use incoming::*;
pub use outgoing::*;
pub use rewards::*;
