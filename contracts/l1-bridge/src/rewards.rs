//! L1 rewards index.
//!
//! The incentives controller reports an asset's index as of its last update.
//! The index a deposit carries is that value brought forward to the current
//! time:
//!
//! `index + emission_per_second * elapsed * 1e18 / scaled_total_supply`
//!
//! where `elapsed` stops counting at `distribution_end`.

use common::incentives::AssetDataResponse;
use common::{MathError, WAD};
use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

pub fn compute_rewards_index(
    asset: &AssetDataResponse,
    scaled_total_supply: Uint128,
    now: u64,
) -> Result<Uint256, ContractError> {
    if scaled_total_supply.is_zero()
        || asset.emission_per_second.is_zero()
        || asset.last_update_timestamp >= asset.distribution_end
    {
        return Ok(asset.index);
    }

    let until = now.min(asset.distribution_end);
    if until <= asset.last_update_timestamp {
        return Ok(asset.index);
    }
    let elapsed = until - asset.last_update_timestamp;

    let accrued = Uint256::from(asset.emission_per_second)
        .checked_mul(Uint256::from(elapsed))?
        .checked_mul(WAD)?
        .checked_div(Uint256::from(scaled_total_supply))
        .map_err(|_| MathError::DivisionByZero)?;

    Ok(asset.index.checked_add(accrued)?)
}
