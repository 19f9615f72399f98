//! Incentives controller with a hand-driven emission schedule.
//!
//! Asset data is set by the owner. Claimable rewards are credited with
//! `Accrue` and paid out of the reward token balance the contract holds.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128, Uint256, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::{Item, Map};
use thiserror::Error;

use common::incentives::{
    AssetDataResponse, IncentivesQueryMsg, RewardTokenResponse, UnclaimedRewardsResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub reward_token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner only; `last_update_timestamp` becomes the current block time
    ConfigureAsset {
        asset: String,
        index: Uint256,
        emission_per_second: Uint128,
        distribution_end: u64,
    },
    /// Owner only; credit claimable rewards to `user`
    Accrue { user: String, amount: Uint128 },
    ClaimRewards {
        assets: Vec<String>,
        amount: Uint128,
        to: String,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,
}

#[cw_serde]
struct Config {
    owner: Addr,
    reward_token: Addr,
}

const CONFIG: Item<Config> = Item::new("config");
const ASSETS: Map<&str, AssetDataResponse> = Map::new("assets");
const UNCLAIMED: Map<&Addr, Uint128> = Map::new("unclaimed");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    CONFIG.save(
        deps.storage,
        &Config {
            owner: deps.api.addr_validate(&msg.owner)?,
            reward_token: deps.api.addr_validate(&msg.reward_token)?,
        },
    )?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match msg {
        ExecuteMsg::ConfigureAsset {
            asset,
            index,
            emission_per_second,
            distribution_end,
        } => {
            if info.sender != config.owner {
                return Err(ContractError::Unauthorized);
            }
            ASSETS.save(
                deps.storage,
                &asset,
                &AssetDataResponse {
                    index,
                    emission_per_second,
                    last_update_timestamp: env.block.time.seconds(),
                    distribution_end,
                },
            )?;
            Ok(Response::new()
                .add_attribute("method", "configure_asset")
                .add_attribute("asset", asset))
        }
        ExecuteMsg::Accrue { user, amount } => {
            if info.sender != config.owner {
                return Err(ContractError::Unauthorized);
            }
            let user = deps.api.addr_validate(&user)?;
            UNCLAIMED.update(deps.storage, &user, |u| -> StdResult<_> {
                Ok(u.unwrap_or_default().checked_add(amount)?)
            })?;
            Ok(Response::new()
                .add_attribute("method", "accrue")
                .add_attribute("user", user)
                .add_attribute("amount", amount))
        }
        ExecuteMsg::ClaimRewards { amount, to, .. } => {
            let unclaimed = UNCLAIMED
                .may_load(deps.storage, &info.sender)?
                .unwrap_or_default();
            let claimed = amount.min(unclaimed);
            UNCLAIMED.save(deps.storage, &info.sender, &(unclaimed - claimed))?;

            let mut response = Response::new()
                .add_attribute("method", "claim_rewards")
                .add_attribute("user", info.sender)
                .add_attribute("amount", claimed);
            if !claimed.is_zero() {
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: config.reward_token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: to,
                        amount: claimed,
                    })?,
                    funds: vec![],
                });
            }
            Ok(response)
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: IncentivesQueryMsg) -> StdResult<Binary> {
    match msg {
        IncentivesQueryMsg::RewardToken {} => to_json_binary(&RewardTokenResponse {
            reward_token: CONFIG.load(deps.storage)?.reward_token,
        }),
        IncentivesQueryMsg::AssetData { asset } => {
            let data = ASSETS
                .may_load(deps.storage, &asset)?
                .ok_or_else(|| StdError::not_found(format!("asset {}", asset)))?;
            to_json_binary(&data)
        }
        IncentivesQueryMsg::UnclaimedRewards { user } => {
            let user = deps.api.addr_validate(&user)?;
            to_json_binary(&UnclaimedRewardsResponse {
                amount: UNCLAIMED.may_load(deps.storage, &user)?.unwrap_or_default(),
            })
        }
    }
}
