//! Execute handlers for the L1 bridge contract.
//!
//! - `deposit` - cw20 deposits of the yield-bearing token or its underlying
//! - `cancellation` - two-step recovery of undelivered deposits
//! - `withdraw` - withdrawals from L2 and index propagation
//! - `reward_forwarding` - paying out rewards bridged back from L2
//! - `governance` - token approvals, ceilings and wiring

mod cancellation;
mod deposit;
mod governance;
mod reward_forwarding;
mod withdraw;

pub use cancellation::*;
pub use deposit::*;
pub use governance::*;
pub use reward_forwarding::*;
pub use withdraw::*;

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::TOKEN_MAPPINGS;

/// Static token mapped to `l1_token`
fn mapped_l2_token(storage: &dyn Storage, l1_token: &Addr) -> Result<String, ContractError> {
    TOKEN_MAPPINGS
        .may_load(storage, l1_token)?
        .ok_or_else(|| ContractError::UnmappedToken {
            token: l1_token.to_string(),
        })
}
