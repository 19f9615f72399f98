//! Interface of the external incentives controller.
//!
//! The controller distributes a reward token to holders of yield-bearing
//! assets. The L1 ledger only reads its emission schedule and claims rewards it
//! has already accrued as a holder.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};

#[cw_serde]
pub enum IncentivesExecuteMsg {
    /// Claim up to `amount` of the caller's accrued rewards to `to`
    ClaimRewards {
        assets: Vec<String>,
        amount: Uint128,
        to: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum IncentivesQueryMsg {
    #[returns(RewardTokenResponse)]
    RewardToken {},

    #[returns(AssetDataResponse)]
    AssetData { asset: String },

    #[returns(UnclaimedRewardsResponse)]
    UnclaimedRewards { user: String },
}

#[cw_serde]
pub struct RewardTokenResponse {
    pub reward_token: Addr,
}

/// Emission schedule of one asset
#[cw_serde]
pub struct AssetDataResponse {
    /// Index (wad) at `last_update_timestamp`
    pub index: Uint256,
    /// Reward units emitted per second across the whole asset supply
    pub emission_per_second: Uint128,
    pub last_update_timestamp: u64,
    pub distribution_end: u64,
}

#[cw_serde]
pub struct UnclaimedRewardsResponse {
    pub amount: Uint128,
}
