//! Interface of the external yield source (lending pool + yield-bearing token).
//!
//! The yield-bearing token is a cw20-compatible balance that grows with the
//! pool's liquidity index (ray). Deposits of the underlying asset arrive through
//! a cw20 `Send` carrying [`YieldSourceHookMsg::Deposit`]; withdrawals burn the
//! caller's yield-bearing balance and pay out the underlying.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};

/// Hook message attached to a cw20 `Send` of the underlying asset
#[cw_serde]
pub enum YieldSourceHookMsg {
    Deposit {
        on_behalf_of: String,
        referral_code: u16,
    },
}

/// Execute messages the bridge sends to the yield source
#[cw_serde]
pub enum YieldSourceExecuteMsg {
    /// Burn `amount` of the caller's yield-bearing balance and send the
    /// underlying asset to `to`
    Withdraw { amount: Uint128, to: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum YieldSourceQueryMsg {
    /// Yield-bearing balance (cw20 shape)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(ReserveDataResponse)]
    ReserveData {},

    #[returns(ScaledTotalSupplyResponse)]
    ScaledTotalSupply {},
}

#[cw_serde]
pub struct ReserveDataResponse {
    pub underlying: Addr,
    /// Liquidity index (ray)
    pub liquidity_index: Uint256,
}

#[cw_serde]
pub struct ScaledTotalSupplyResponse {
    pub scaled_total_supply: Uint128,
}
