//! L1 Governance Relay - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::messaging::encode_payload;
use common::{GovernancePayload, MessengerExecuteMsg};

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let config = Config {
        executor: deps.api.addr_validate(&msg.executor)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l2_governance_relay: msg.l2_governance_relay,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("executor", config.executor)
        .add_attribute("l2_governance_relay", config.l2_governance_relay))
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
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.executor {
        return Err(ContractError::NotGovernor);
    }

    match msg {
        ExecuteMsg::Relay { spell } => {
            let send = MessengerExecuteMsg::SendMessageToL2 {
                to: config.l2_governance_relay.clone(),
                payload: encode_payload(&GovernancePayload::Execute {
                    spell: spell.clone(),
                })?,
            }
            .into_cosmos_msg(config.messenger)?;

            Ok(Response::new()
                .add_message(send)
                .add_attribute("method", "relay")
                .add_attribute("spell", spell)
                .add_attribute("l2_governance_relay", config.l2_governance_relay))
        }
        ExecuteMsg::SetExecutor { executor } => {
            config.executor = deps.api.addr_validate(&executor)?;
            CONFIG.save(deps.storage, &config)?;

            Ok(Response::new()
                .add_attribute("method", "set_executor")
                .add_attribute("previous_executor", info.sender)
                .add_attribute("executor", config.executor))
        }
        ExecuteMsg::SetL2GovernanceRelay {
            l2_governance_relay,
        } => {
            config.l2_governance_relay = l2_governance_relay;
            CONFIG.save(deps.storage, &config)?;

            Ok(Response::new()
                .add_attribute("method", "set_l2_governance_relay")
                .add_attribute("l2_governance_relay", config.l2_governance_relay))
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                executor: config.executor,
                messenger: config.messenger,
                l2_governance_relay: config.l2_governance_relay,
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
