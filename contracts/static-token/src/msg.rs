//! Message types for the static token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Minted to `recipient` at instantiation; may be zero
    pub initial_supply: Uint128,
    pub recipient: String,
    pub owner: String,
    pub bridge: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // cw20
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Transfer and invoke `Cw20ReceiveMsg` on `contract`
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Authorization: Bridge only
    Mint { recipient: String, amount: Uint128 },

    /// Authorization: Bridge only
    Burn { holder: String, amount: Uint128 },

    /// Push a new global rewards index taken at L1 block `block_number`
    ///
    /// Authorization: Bridge only
    PushRewardsIndex { block_number: u64, index: Uint256 },

    // ========================================================================
    // Rewards
    // ========================================================================
    /// Pay the caller's accrued rewards to `recipient`
    ///
    /// Authorization: Any holder, for themselves
    ClaimRewards { recipient: String },

    // ========================================================================
    // Owner
    // ========================================================================
    /// Authorization: Owner only
    SetBridge { bridge: String },

    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(ConfigResponse)]
    Config {},

    #[returns(RewardsIndexResponse)]
    RewardsIndex {},

    #[returns(UserRewardsIndexResponse)]
    UserRewardsIndex { address: String },

    /// Rewards `address` would receive from `ClaimRewards` now
    #[returns(ClaimableRewardsResponse)]
    ClaimableRewards { address: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub bridge: Addr,
}

#[cw_serde]
pub struct RewardsIndexResponse {
    pub index: Uint256,
    pub block_number: u64,
}

#[cw_serde]
pub struct UserRewardsIndexResponse {
    pub index: Uint256,
    pub unclaimed: Uint128,
}

#[cw_serde]
pub struct ClaimableRewardsResponse {
    pub amount: Uint128,
}
