//! Queries against the yield source, incentives controller and messenger.

use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20QueryMsg};

use common::incentives::{AssetDataResponse, IncentivesQueryMsg, UnclaimedRewardsResponse};
use common::messaging::MessengerNonceResponse;
use common::yield_source::{ReserveDataResponse, ScaledTotalSupplyResponse, YieldSourceQueryMsg};
use common::MessengerQueryMsg;

use crate::error::ContractError;
use crate::rewards::compute_rewards_index;
use crate::state::Config;

/// cw20 balance of `holder` (the yield-bearing token is cw20 compatible)
pub fn token_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    holder: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn reserve_data(querier: &QuerierWrapper, l1_token: &Addr) -> StdResult<ReserveDataResponse> {
    querier.query_wasm_smart(l1_token, &YieldSourceQueryMsg::ReserveData {})
}

pub fn liquidity_index(querier: &QuerierWrapper, l1_token: &Addr) -> StdResult<Uint256> {
    Ok(reserve_data(querier, l1_token)?.liquidity_index)
}

/// Nonce the messenger will assign to the next L1 -> L2 message
pub fn next_message_nonce(querier: &QuerierWrapper, messenger: &Addr) -> StdResult<u64> {
    let res: MessengerNonceResponse =
        querier.query_wasm_smart(messenger, &MessengerQueryMsg::L1ToL2Nonce {})?;
    Ok(res.nonce)
}

pub fn unclaimed_rewards(
    querier: &QuerierWrapper,
    incentives: &Addr,
    user: &Addr,
) -> StdResult<Uint128> {
    let res: UnclaimedRewardsResponse = querier.query_wasm_smart(
        incentives,
        &IncentivesQueryMsg::UnclaimedRewards {
            user: user.to_string(),
        },
    )?;
    Ok(res.amount)
}

/// Current L1 rewards index of `l1_token`
pub fn current_rewards_index(
    querier: &QuerierWrapper,
    config: &Config,
    l1_token: &Addr,
    now: u64,
) -> Result<Uint256, ContractError> {
    let asset: AssetDataResponse = querier.query_wasm_smart(
        &config.incentives_controller,
        &IncentivesQueryMsg::AssetData {
            asset: l1_token.to_string(),
        },
    )?;
    let supply: ScaledTotalSupplyResponse =
        querier.query_wasm_smart(l1_token, &YieldSourceQueryMsg::ScaledTotalSupply {})?;
    compute_rewards_index(&asset, supply.scaled_total_supply, now)
}
