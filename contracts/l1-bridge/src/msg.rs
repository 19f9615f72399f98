//! Message types for the L1 bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw20::Cw20ReceiveMsg;

use crate::state::PendingCancellation;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub governor: String,
    pub messenger: String,
    pub l2_bridge: String,
    pub incentives_controller: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // User Operations
    // ========================================================================
    /// Deposit the yield-bearing token, or its underlying asset
    /// (`ReceiveMsg::Deposit`)
    Receive(Cw20ReceiveMsg),

    /// Start cancelling a deposit that has not been delivered to L2
    ///
    /// Authorization: The original depositor. The arguments must match the
    /// deposit exactly.
    StartDepositCancellation {
        l1_token: String,
        amount: Uint128,
        l2_recipient: String,
        rewards_index: Uint256,
        block_number: u64,
        from_underlying: bool,
        nonce: u64,
    },

    /// Complete a cancellation after the messenger's cancellation delay and
    /// return the deposit to the depositor
    ///
    /// Authorization: The original depositor
    CancelDeposit {
        l1_token: String,
        amount: Uint128,
        l2_recipient: String,
        rewards_index: Uint256,
        block_number: u64,
        from_underlying: bool,
        nonce: u64,
    },

    /// Forget a started cancellation, e.g. after L2 consumed the deposit
    ///
    /// Authorization: The depositor who started it
    ClearDepositCancellation { nonce: u64 },

    /// Consume a finalized withdrawal from L2 and release the funds
    ///
    /// Authorization: Anyone (the message content is authenticated by the
    /// messenger)
    Withdraw {
        l1_token: String,
        l2_sender: String,
        recipient: String,
        /// Static amount burned on L2
        amount: Uint128,
        l2_rewards_index: Uint256,
        to_underlying: bool,
    },

    /// Consume a finalized reward bridging message and pay the recipient
    ///
    /// Authorization: Anyone
    ReceiveRewards {
        l2_sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Send the current rewards index of `l1_token` to L2
    ///
    /// Authorization: Anyone
    UpdateL2State { l1_token: String },

    // ========================================================================
    // Governance
    // ========================================================================
    /// Authorization: Governor only
    ApproveToken { l1_token: String, l2_token: String },

    /// Authorization: Governor only
    SetCeiling { l1_token: String, ceiling: Uint128 },

    /// Authorization: Governor only
    SetL2Bridge { l2_bridge: String },

    /// Authorization: Governor only
    SetGovernor { governor: String },
}

/// cw20 hook messages
#[cw_serde]
pub enum ReceiveMsg {
    Deposit {
        /// Yield-bearing token being bridged
        l1_token: String,
        l2_recipient: String,
        referral_code: u16,
        /// The sent token is the underlying asset of `l1_token`
        from_underlying: bool,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(TokenMappingResponse)]
    TokenMapping { l1_token: String },

    #[returns(CeilingResponse)]
    Ceiling { l1_token: String },

    /// Yield-bearing balance held by the bridge
    #[returns(LedgerBalanceResponse)]
    LedgerBalance { l1_token: String },

    /// Rewards index the next deposit of `l1_token` would carry
    #[returns(RewardsIndexResponse)]
    RewardsIndex { l1_token: String },

    #[returns(PendingCancellationResponse)]
    PendingCancellation { nonce: u64 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub governor: Addr,
    pub messenger: Addr,
    pub l2_bridge: String,
    pub incentives_controller: Addr,
    pub reward_token: Addr,
}

#[cw_serde]
pub struct TokenMappingResponse {
    pub l2_token: Option<String>,
}

#[cw_serde]
pub struct CeilingResponse {
    pub ceiling: Option<Uint128>,
}

#[cw_serde]
pub struct LedgerBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct RewardsIndexResponse {
    pub rewards_index: Uint256,
}

#[cw_serde]
pub struct PendingCancellationResponse {
    pub cancellation: Option<PendingCancellation>,
}
