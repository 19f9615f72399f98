//! Upgrade Proxy - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, Target, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TARGET};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    CONFIG.save(deps.storage, &Config { admin: admin.clone() })?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::NotAdmin);
    }

    match msg {
        ExecuteMsg::Initialize {
            target,
            implementation,
        } => execute_initialize(deps, env, target, implementation),
        ExecuteMsg::Upgrade {
            new_implementation,
            migrate_msg,
        } => execute_upgrade(deps, new_implementation, migrate_msg),
        ExecuteMsg::ChangeAdmin { admin } => {
            let admin = deps.api.addr_validate(&admin)?;
            CONFIG.save(deps.storage, &Config { admin: admin.clone() })?;

            Ok(Response::new()
                .add_attribute("method", "change_admin")
                .add_attribute("previous_admin", info.sender)
                .add_attribute("admin", admin))
        }
    }
}

fn execute_initialize(
    deps: DepsMut,
    env: Env,
    target: String,
    implementation: u64,
) -> Result<Response, ContractError> {
    if TARGET.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let target = deps.api.addr_validate(&target)?;
    let info = deps.querier.query_wasm_contract_info(&target)?;
    if info.admin.as_deref() != Some(env.contract.address.as_str()) {
        return Err(ContractError::NotTargetAdmin {
            target: target.to_string(),
        });
    }
    if info.code_id != implementation {
        return Err(ContractError::ImplementationMismatch {
            expected: implementation,
            actual: info.code_id,
        });
    }

    TARGET.save(
        deps.storage,
        &Target {
            address: target.clone(),
            implementation,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("target", target)
        .add_attribute("implementation", implementation.to_string()))
}

fn execute_upgrade(
    deps: DepsMut,
    new_implementation: u64,
    migrate_msg: Binary,
) -> Result<Response, ContractError> {
    let mut target = TARGET
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)?;
    let previous = target.implementation;

    target.implementation = new_implementation;
    TARGET.save(deps.storage, &target)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: target.address.to_string(),
        new_code_id: new_implementation,
        msg: migrate_msg,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("method", "upgrade")
        .add_attribute("target", target.address)
        .add_attribute("previous_implementation", previous.to_string())
        .add_attribute("implementation", new_implementation.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            let target = TARGET.may_load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                target: target.as_ref().map(|t| t.address.clone()),
                implementation: target.map(|t| t.implementation),
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
