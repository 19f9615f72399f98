//! Message types for the L2 bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub governor: String,
    pub messenger: String,
    pub l1_bridge: Option<String>,
    pub reward_token: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Messenger
    // ========================================================================
    /// Deliver a message from L1
    ///
    /// Authorization: Messenger only, `from_address` must be the L1 bridge
    ReceiveFromL1 {
        from_address: String,
        payload: Binary,
    },

    // ========================================================================
    // User Operations
    // ========================================================================
    /// Burn static tokens and send a withdrawal to L1
    ///
    /// Authorization: Any holder, for their own balance
    InitiateWithdraw {
        l2_token: String,
        l1_recipient: String,
        amount: Uint128,
        /// Release the underlying asset instead of the yield-bearing token
        to_underlying: bool,
    },

    /// Bridge reward tokens back to L1 (`ReceiveMsg::BridgeRewards`)
    Receive(Cw20ReceiveMsg),

    /// Mint reward tokens for a static token claim
    ///
    /// Authorization: Mapped static tokens only
    MintRewards { recipient: String, amount: Uint128 },

    // ========================================================================
    // Governance
    // ========================================================================
    /// Register an (L1 token, static token) mapping
    ///
    /// Authorization: Governor only
    ApproveBridge { l1_token: String, l2_token: String },

    /// Authorization: Governor only
    SetL1Bridge { l1_bridge: String },

    /// Authorization: Governor only
    SetRewardToken { reward_token: String },

    /// Authorization: Governor only
    SetGovernor { governor: String },
}

/// cw20 hook messages
#[cw_serde]
pub enum ReceiveMsg {
    BridgeRewards { l1_recipient: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Static token mapped to an L1 token
    #[returns(L2TokenResponse)]
    L2Token { l1_token: String },

    /// L1 token mapped to a static token
    #[returns(L1TokenResponse)]
    L1Token { l2_token: String },

    #[returns(MappingsResponse)]
    Mappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub governor: Addr,
    pub messenger: Addr,
    pub l1_bridge: Option<String>,
    pub reward_token: Option<Addr>,
}

#[cw_serde]
pub struct L2TokenResponse {
    pub l2_token: Option<Addr>,
}

#[cw_serde]
pub struct L1TokenResponse {
    pub l1_token: Option<String>,
}

#[cw_serde]
pub struct TokenMapping {
    pub l1_token: String,
    pub l2_token: Addr,
}

#[cw_serde]
pub struct MappingsResponse {
    pub mappings: Vec<TokenMapping>,
}
