//! L2 Governance Relay - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply,
    Response, StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::messaging::decode_payload;
use common::spell::{SpellQueryMsg, SpellResponse};
use common::GovernancePayload;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SpellExecutionResponse,
    SpellExecutionsResponse,
};
use crate::state::{
    Config, ExecutionStatus, SpellExecution, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    EXECUTIONS, NEXT_EXECUTION_ID,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

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

    let config = Config {
        deployer: info.sender,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l1_governance_relay: None,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_EXECUTION_ID.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deployer", config.deployer)
        .add_attribute("messenger", config.messenger))
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
    match msg {
        ExecuteMsg::Initialize {
            l1_governance_relay,
        } => execute_initialize(deps, info, l1_governance_relay),
        ExecuteMsg::ReceiveFromL1 {
            from_address,
            payload,
        } => execute_receive_from_l1(deps, env, info, from_address, payload),
        ExecuteMsg::ExecuteSpell { spell } => execute_spell(deps, env, info, spell),
    }
}

fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    l1_governance_relay: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.deployer {
        return Err(ContractError::NotAdmin);
    }
    if config.l1_governance_relay.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    config.l1_governance_relay = Some(l1_governance_relay.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("l1_governance_relay", l1_governance_relay))
}

fn execute_receive_from_l1(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from_address: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.messenger {
        return Err(ContractError::NotMessenger);
    }
    let l1_governance_relay = config
        .l1_governance_relay
        .ok_or(ContractError::NotInitialized)?;
    if from_address != l1_governance_relay {
        return Err(ContractError::UnauthorizedSender {
            sender: from_address,
        });
    }

    let GovernancePayload::Execute { spell } = decode_payload(&payload)?;
    let spell = deps.api.addr_validate(&spell)?;

    let id = NEXT_EXECUTION_ID.load(deps.storage)?;
    NEXT_EXECUTION_ID.save(deps.storage, &(id + 1))?;
    EXECUTIONS.save(
        deps.storage,
        id,
        &SpellExecution {
            id,
            spell: spell.clone(),
            height: env.block.height,
            status: ExecutionStatus::Pending,
        },
    )?;

    // a failing spell reverts its own actions only; the delivery still commits
    let run = SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: env.contract.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::ExecuteSpell {
                spell: spell.to_string(),
            })?,
            funds: vec![],
        },
        id,
    );

    Ok(Response::new()
        .add_submessage(run)
        .add_attribute("method", "receive_from_l1")
        .add_attribute("spell", spell)
        .add_attribute("execution_id", id.to_string()))
}

fn execute_spell(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spell: String,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::NotSelf);
    }

    let spell = deps.api.addr_validate(&spell)?;
    // A spell with a wasm admin could be migrated after it was relayed
    let info = deps.querier.query_wasm_contract_info(&spell)?;
    if info.admin.is_some() {
        return Err(ContractError::SpellHasAdmin {
            spell: spell.to_string(),
        });
    }
    let loaded = load_spell(deps.as_ref(), &spell)?;
    if !loaded.locked {
        return Err(ContractError::SpellNotLocked {
            spell: spell.to_string(),
        });
    }

    let messages = loaded
        .actions
        .iter()
        .map(|action| action.to_cosmos_msg())
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "execute_spell")
        .add_attribute("spell", spell)
        .add_attribute("actions", loaded.actions.len().to_string()))
}

fn load_spell(deps: Deps, spell: &Addr) -> StdResult<SpellResponse> {
    deps.querier.query_wasm_smart(spell, &SpellQueryMsg::Spell {})
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let mut execution = EXECUTIONS
        .may_load(deps.storage, msg.id)?
        .ok_or(ContractError::UnknownExecution { id: msg.id })?;

    execution.status = match msg.result {
        SubMsgResult::Ok(_) => ExecutionStatus::Succeeded,
        SubMsgResult::Err(error) => ExecutionStatus::Failed { error },
    };
    EXECUTIONS.save(deps.storage, msg.id, &execution)?;

    let succeeded = execution.status == ExecutionStatus::Succeeded;
    Ok(Response::new()
        .add_attribute("method", "spell_executed")
        .add_attribute("execution_id", msg.id.to_string())
        .add_attribute("spell", execution.spell)
        .add_attribute("succeeded", succeeded.to_string()))
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
                deployer: config.deployer,
                messenger: config.messenger,
                l1_governance_relay: config.l1_governance_relay,
            })
        }
        QueryMsg::SpellExecution { id } => to_json_binary(&SpellExecutionResponse {
            execution: EXECUTIONS.may_load(deps.storage, id)?,
        }),
        QueryMsg::SpellExecutions { start_after, limit } => {
            let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
            let start = start_after.map(Bound::exclusive);
            let executions = EXECUTIONS
                .range(deps.storage, start, None, Order::Ascending)
                .take(limit)
                .map(|item| item.map(|(_, execution)| execution))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&SpellExecutionsResponse { executions })
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
