//! Query handlers for the L2 bridge contract.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, L1TokenResponse, L2TokenResponse, MappingsResponse, TokenMapping,
};
use crate::state::{CONFIG, L1_TO_L2_TOKENS, L2_TO_L1_TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        governor: config.governor,
        messenger: config.messenger,
        l1_bridge: config.l1_bridge,
        reward_token: config.reward_token,
    })
}

pub fn query_l2_token(deps: Deps, l1_token: String) -> StdResult<L2TokenResponse> {
    Ok(L2TokenResponse {
        l2_token: L1_TO_L2_TOKENS.may_load(deps.storage, &l1_token)?,
    })
}

pub fn query_l1_token(deps: Deps, l2_token: String) -> StdResult<L1TokenResponse> {
    let l2_token = deps.api.addr_validate(&l2_token)?;
    Ok(L1TokenResponse {
        l1_token: L2_TO_L1_TOKENS.may_load(deps.storage, &l2_token)?,
    })
}

/// Mappings ordered by L1 token
pub fn query_mappings(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MappingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let mappings = L1_TO_L2_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (l1_token, l2_token) = item?;
            Ok(TokenMapping { l1_token, l2_token })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MappingsResponse { mappings })
}
