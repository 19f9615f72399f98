//! Query handlers for the L1 bridge contract.

use cosmwasm_std::{Deps, Env, StdError, StdResult};

use crate::msg::{
    CeilingResponse, ConfigResponse, LedgerBalanceResponse, PendingCancellationResponse,
    RewardsIndexResponse, TokenMappingResponse,
};
use crate::querier::{current_rewards_index, token_balance};
use crate::state::{CEILINGS, CONFIG, PENDING_CANCELLATIONS, TOKEN_MAPPINGS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        governor: config.governor,
        messenger: config.messenger,
        l2_bridge: config.l2_bridge,
        incentives_controller: config.incentives_controller,
        reward_token: config.reward_token,
    })
}

pub fn query_token_mapping(deps: Deps, l1_token: String) -> StdResult<TokenMappingResponse> {
    let l1_token = deps.api.addr_validate(&l1_token)?;
    Ok(TokenMappingResponse {
        l2_token: TOKEN_MAPPINGS.may_load(deps.storage, &l1_token)?,
    })
}

pub fn query_ceiling(deps: Deps, l1_token: String) -> StdResult<CeilingResponse> {
    let l1_token = deps.api.addr_validate(&l1_token)?;
    Ok(CeilingResponse {
        ceiling: CEILINGS.may_load(deps.storage, &l1_token)?,
    })
}

/// Yield-bearing balance held by the bridge
pub fn query_ledger_balance(
    deps: Deps,
    env: Env,
    l1_token: String,
) -> StdResult<LedgerBalanceResponse> {
    let l1_token = deps.api.addr_validate(&l1_token)?;
    Ok(LedgerBalanceResponse {
        balance: token_balance(&deps.querier, &l1_token, &env.contract.address)?,
    })
}

pub fn query_rewards_index(
    deps: Deps,
    env: Env,
    l1_token: String,
) -> StdResult<RewardsIndexResponse> {
    let config = CONFIG.load(deps.storage)?;
    let l1_token = deps.api.addr_validate(&l1_token)?;
    let rewards_index =
        current_rewards_index(&deps.querier, &config, &l1_token, env.block.time.seconds())
            .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(RewardsIndexResponse { rewards_index })
}

pub fn query_pending_cancellation(
    deps: Deps,
    nonce: u64,
) -> StdResult<PendingCancellationResponse> {
    Ok(PendingCancellationResponse {
        cancellation: PENDING_CANCELLATIONS.may_load(deps.storage, nonce)?,
    })
}
