//! Rewards index accrual.
//!
//! A holder's pending rewards are `unclaimed + wadMul(balance, index - userIndex)`.
//! `settle` folds the second term into `unclaimed` and moves the holder's
//! snapshot to the current index; it must run before any change to the
//! holder's balance.

use common::math::to_uint128;
use common::wad_mul;
use cosmwasm_std::{Addr, Storage, Uint128, Uint256};
use cw20_base::state::BALANCES;

use crate::error::ContractError;
use crate::state::{RewardsIndex, UserRewards, REWARDS_INDEX, USER_REWARDS};

/// Rewards earned by `balance` while the index moved from `user_index` to `index`
pub fn accrued(
    balance: Uint128,
    index: Uint256,
    user_index: Uint256,
) -> Result<Uint128, ContractError> {
    let delta = index.checked_sub(user_index)?;
    Ok(to_uint128(wad_mul(Uint256::from(balance), delta)?)?)
}

/// Check a push against the last pushed index
pub fn validate_push(
    current: &RewardsIndex,
    block_number: u64,
    index: Uint256,
) -> Result<(), ContractError> {
    if block_number <= current.block_number {
        return Err(ContractError::StaleIndex {
            last_block: current.block_number,
            block_number,
        });
    }
    if index < current.index {
        return Err(ContractError::IndexRegression {
            current: current.index,
            index,
        });
    }
    Ok(())
}

/// Holder's rewards as they would be after settling now
pub fn pending(storage: &dyn Storage, holder: &Addr) -> Result<UserRewards, ContractError> {
    let global = REWARDS_INDEX.load(storage)?;
    let balance = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    let user = USER_REWARDS.may_load(storage, holder)?.unwrap_or_default();

    let earned = accrued(balance, global.index, user.index)?;
    Ok(UserRewards {
        index: global.index,
        unclaimed: user.unclaimed.checked_add(earned)?,
    })
}

/// Settle the holder's accrual at the current balance
pub fn settle(storage: &mut dyn Storage, holder: &Addr) -> Result<UserRewards, ContractError> {
    let user = pending(storage, holder)?;
    USER_REWARDS.save(storage, holder, &user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::WAD;

    fn wad(n: u128) -> Uint256 {
        Uint256::from(n) * WAD
    }

    #[test]
    fn test_accrued_is_balance_times_index_delta() {
        let earned = accrued(Uint128::new(28), wad(3), wad(1)).unwrap();
        assert_eq!(earned, Uint128::new(56));
    }

    #[test]
    fn test_accrued_zero_when_index_unchanged() {
        let earned = accrued(Uint128::new(1_000), wad(5), wad(5)).unwrap();
        assert_eq!(earned, Uint128::zero());
    }

    #[test]
    fn test_accrued_rounds_half_up() {
        // 3 * 0.5 = 1.5 -> 2
        let half = WAD / Uint256::from(2u8);
        let earned = accrued(Uint128::new(3), half, Uint256::zero()).unwrap();
        assert_eq!(earned, Uint128::new(2));
    }

    #[test]
    fn test_accrued_rejects_user_index_above_global() {
        assert!(accrued(Uint128::new(1), wad(1), wad(2)).is_err());
    }

    #[test]
    fn test_validate_push() {
        let current = RewardsIndex {
            index: wad(2),
            block_number: 10,
        };

        assert!(validate_push(&current, 11, wad(2)).is_ok());
        assert!(validate_push(&current, 11, wad(3)).is_ok());

        assert_eq!(
            validate_push(&current, 10, wad(3)),
            Err(ContractError::StaleIndex {
                last_block: 10,
                block_number: 10
            })
        );
        assert_eq!(
            validate_push(&current, 12, wad(1)),
            Err(ContractError::IndexRegression {
                current: wad(2),
                index: wad(1)
            })
        );
    }
}
