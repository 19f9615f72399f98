//! Yield source: lending pool and yield-bearing token in one contract.
//!
//! Holders own scaled balances; the visible balance is
//! `rayMul(scaled, liquidity_index)`, so raising the index accrues interest to
//! every holder without a transfer.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, Uint256, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

use common::math::to_uint128;
use common::yield_source::{
    ReserveDataResponse, ScaledTotalSupplyResponse, YieldSourceHookMsg, YieldSourceQueryMsg,
};
use common::{ray_div, ray_mul, MathError, RAY};

#[cw_serde]
pub struct InstantiateMsg {
    /// cw20 address of the underlying asset
    pub underlying: String,
    pub name: String,
    pub symbol: String,
    /// May move the liquidity index
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Underlying deposits (`YieldSourceHookMsg::Deposit`)
    Receive(Cw20ReceiveMsg),
    Withdraw {
        amount: Uint128,
        to: String,
    },
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Owner only; the index may never decrease
    SetLiquidityIndex {
        index: Uint256,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Only the underlying asset can be deposited")]
    WrongAsset,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Liquidity index cannot decrease")]
    IndexDecrease,
}

#[cw_serde]
struct Config {
    underlying: Addr,
    owner: Addr,
    name: String,
    symbol: String,
}

const CONFIG: Item<Config> = Item::new("config");
const LIQUIDITY_INDEX: Item<Uint256> = Item::new("liquidity_index");
const SCALED_BALANCES: Map<&Addr, Uint128> = Map::new("scaled_balances");
const SCALED_TOTAL_SUPPLY: Item<Uint128> = Item::new("scaled_total_supply");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    CONFIG.save(
        deps.storage,
        &Config {
            underlying: deps.api.addr_validate(&msg.underlying)?,
            owner: deps.api.addr_validate(&msg.owner)?,
            name: msg.name,
            symbol: msg.symbol,
        },
    )?;
    LIQUIDITY_INDEX.save(deps.storage, &RAY)?;
    SCALED_TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(cw20_msg) => {
            let config = CONFIG.load(deps.storage)?;
            if info.sender != config.underlying {
                return Err(ContractError::WrongAsset);
            }
            let YieldSourceHookMsg::Deposit { on_behalf_of, .. } = from_json(&cw20_msg.msg)?;
            let holder = deps.api.addr_validate(&on_behalf_of)?;
            let scaled = scaled_amount(deps.as_ref(), cw20_msg.amount)?;
            credit(deps, &holder, scaled)?;
            Ok(Response::new()
                .add_attribute("method", "deposit")
                .add_attribute("on_behalf_of", holder)
                .add_attribute("amount", cw20_msg.amount))
        }
        ExecuteMsg::Withdraw { amount, to } => {
            let config = CONFIG.load(deps.storage)?;
            let scaled = scaled_amount(deps.as_ref(), amount)?;
            debit(deps, &info.sender, scaled)?;
            Ok(Response::new()
                .add_message(WasmMsg::Execute {
                    contract_addr: config.underlying.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: to.clone(),
                        amount,
                    })?,
                    funds: vec![],
                })
                .add_attribute("method", "withdraw")
                .add_attribute("to", to)
                .add_attribute("amount", amount))
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            move_balance(deps, &info.sender, &recipient, amount)?;
            Ok(Response::new()
                .add_attribute("method", "transfer")
                .add_attribute("from", info.sender)
                .add_attribute("to", recipient)
                .add_attribute("amount", amount))
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => {
            let contract = deps.api.addr_validate(&contract)?;
            move_balance(deps, &info.sender, &contract, amount)?;
            let hook = Cw20ReceiveMsg {
                sender: info.sender.to_string(),
                amount,
                msg,
            }
            .into_cosmos_msg(contract.to_string())?;
            Ok(Response::new()
                .add_message(hook)
                .add_attribute("method", "send")
                .add_attribute("from", info.sender)
                .add_attribute("to", contract)
                .add_attribute("amount", amount))
        }
        ExecuteMsg::SetLiquidityIndex { index } => {
            let config = CONFIG.load(deps.storage)?;
            if info.sender != config.owner {
                return Err(ContractError::Unauthorized);
            }
            if index < LIQUIDITY_INDEX.load(deps.storage)? {
                return Err(ContractError::IndexDecrease);
            }
            LIQUIDITY_INDEX.save(deps.storage, &index)?;
            Ok(Response::new()
                .add_attribute("method", "set_liquidity_index")
                .add_attribute("index", index.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: YieldSourceQueryMsg) -> StdResult<Binary> {
    match msg {
        YieldSourceQueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            let scaled = SCALED_BALANCES
                .may_load(deps.storage, &address)?
                .unwrap_or_default();
            let index = LIQUIDITY_INDEX.load(deps.storage)?;
            let balance = ray_mul(Uint256::from(scaled), index)
                .and_then(to_uint128)
                .map_err(|e| StdError::generic_err(e.to_string()))?;
            to_json_binary(&BalanceResponse { balance })
        }
        YieldSourceQueryMsg::ReserveData {} => to_json_binary(&ReserveDataResponse {
            underlying: CONFIG.load(deps.storage)?.underlying,
            liquidity_index: LIQUIDITY_INDEX.load(deps.storage)?,
        }),
        YieldSourceQueryMsg::ScaledTotalSupply {} => to_json_binary(&ScaledTotalSupplyResponse {
            scaled_total_supply: SCALED_TOTAL_SUPPLY.load(deps.storage)?,
        }),
    }
}

fn scaled_amount(deps: Deps, amount: Uint128) -> Result<Uint128, ContractError> {
    let index = LIQUIDITY_INDEX.load(deps.storage)?;
    Ok(to_uint128(ray_div(Uint256::from(amount), index)?)?)
}

fn credit(deps: DepsMut, holder: &Addr, scaled: Uint128) -> Result<(), ContractError> {
    SCALED_BALANCES.update(deps.storage, holder, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default().checked_add(scaled)?)
    })?;
    SCALED_TOTAL_SUPPLY.update(deps.storage, |s| -> StdResult<_> {
        Ok(s.checked_add(scaled)?)
    })?;
    Ok(())
}

fn debit(deps: DepsMut, holder: &Addr, scaled: Uint128) -> Result<(), ContractError> {
    let balance = SCALED_BALANCES
        .may_load(deps.storage, holder)?
        .unwrap_or_default();
    let remaining = balance
        .checked_sub(scaled)
        .map_err(|_| ContractError::InsufficientBalance)?;
    SCALED_BALANCES.save(deps.storage, holder, &remaining)?;
    SCALED_TOTAL_SUPPLY.update(deps.storage, |s| -> StdResult<_> {
        Ok(s.checked_sub(scaled)?)
    })?;
    Ok(())
}

fn move_balance(
    mut deps: DepsMut,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let scaled = scaled_amount(deps.as_ref(), amount)?;
    debit(deps.branch(), from, scaled)?;
    credit(deps, to, scaled)
}
