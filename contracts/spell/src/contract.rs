//! Spell Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::spell::SpellAction;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SpellResponse};
use crate::state::{Spell, CONTRACT_NAME, CONTRACT_VERSION, SPELL};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    validate_actions(&deps, &msg.actions)?;

    let spell = Spell {
        creator: info.sender,
        description: msg.description,
        actions: msg.actions,
        locked: false,
    };
    SPELL.save(deps.storage, &spell)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("creator", spell.creator)
        .add_attribute("actions", spell.actions.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let mut spell = SPELL.load(deps.storage)?;
    if info.sender != spell.creator {
        return Err(ContractError::NotCreator);
    }
    if spell.locked {
        return Err(ContractError::Locked);
    }

    match msg {
        ExecuteMsg::UpdateActions {
            description,
            actions,
        } => {
            validate_actions(&deps, &actions)?;
            if let Some(description) = description {
                spell.description = description;
            }
            spell.actions = actions;
            SPELL.save(deps.storage, &spell)?;

            Ok(Response::new()
                .add_attribute("method", "update_actions")
                .add_attribute("actions", spell.actions.len().to_string()))
        }
        ExecuteMsg::Lock {} => {
            spell.locked = true;
            SPELL.save(deps.storage, &spell)?;

            Ok(Response::new().add_attribute("method", "lock"))
        }
    }
}

/// Every target must be a valid address and there must be something to do
fn validate_actions(deps: &DepsMut, actions: &[SpellAction]) -> Result<(), ContractError> {
    if actions.is_empty() {
        return Err(ContractError::NoActions);
    }
    for action in actions {
        deps.api.addr_validate(action.target())?;
    }
    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Spell {} => {
            let spell = SPELL.load(deps.storage)?;
            to_json_binary(&SpellResponse {
                creator: spell.creator,
                description: spell.description,
                actions: spell.actions,
                locked: spell.locked,
            })
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
