//! Governor-only configuration handlers.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage, Uint128};

use super::mapped_l2_token;
use crate::error::ContractError;
use crate::state::{Config, CEILINGS, CONFIG, TOKEN_MAPPINGS, UNBOUNDED_CEILING};

fn load_as_governor(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.governor {
        return Err(ContractError::NotGovernor);
    }
    Ok(config)
}

/// Register the static token for `l1_token`. New tokens start without a
/// ceiling; approving the same pair again keeps the configured ceiling.
pub fn execute_approve_token(
    deps: DepsMut,
    info: MessageInfo,
    l1_token: String,
    l2_token: String,
) -> Result<Response, ContractError> {
    load_as_governor(deps.storage, &info.sender)?;
    let l1_token = deps.api.addr_validate(&l1_token)?;

    match TOKEN_MAPPINGS.may_load(deps.storage, &l1_token)? {
        Some(mapped) if mapped != l2_token => {
            return Err(ContractError::AlreadyMapped {
                l1_token: l1_token.to_string(),
                l2_token: mapped,
            });
        }
        Some(_) => {}
        None => {
            TOKEN_MAPPINGS.save(deps.storage, &l1_token, &l2_token)?;
            CEILINGS.save(deps.storage, &l1_token, &UNBOUNDED_CEILING)?;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "approve_token")
        .add_attribute("l1_token", l1_token)
        .add_attribute("l2_token", l2_token))
}

pub fn execute_set_ceiling(
    deps: DepsMut,
    info: MessageInfo,
    l1_token: String,
    ceiling: Uint128,
) -> Result<Response, ContractError> {
    load_as_governor(deps.storage, &info.sender)?;
    let l1_token = deps.api.addr_validate(&l1_token)?;
    mapped_l2_token(deps.storage, &l1_token)?;

    CEILINGS.save(deps.storage, &l1_token, &ceiling)?;

    Ok(Response::new()
        .add_attribute("method", "set_ceiling")
        .add_attribute("l1_token", l1_token)
        .add_attribute("ceiling", ceiling))
}

pub fn execute_set_l2_bridge(
    deps: DepsMut,
    info: MessageInfo,
    l2_bridge: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_governor(deps.storage, &info.sender)?;
    config.l2_bridge = l2_bridge.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_l2_bridge")
        .add_attribute("l2_bridge", l2_bridge))
}

pub fn execute_set_governor(
    deps: DepsMut,
    info: MessageInfo,
    governor: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_governor(deps.storage, &info.sender)?;
    config.governor = deps.api.addr_validate(&governor)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_governor")
        .add_attribute("previous_governor", info.sender)
        .add_attribute("governor", config.governor))
}
