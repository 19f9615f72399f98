//! Fixed-point math for wad (1e18) and ray (1e27) scaled quantities.
//!
//! Multiplications round half up by adding half of the scale before dividing;
//! divisions round half up by adding half of the divisor. Every intermediate
//! step is checked, so an operation either returns the rounded value or fails
//! with [`MathError`]; nothing is silently truncated.
//!
//! | Operation      | Result                                   |
//! |----------------|------------------------------------------|
//! | `wad_mul(a,b)` | `(a * b + WAD / 2) / WAD`                |
//! | `wad_div(a,b)` | `(a * WAD + b / 2) / b`                  |
//! | `ray_mul(a,b)` | `(a * b + RAY / 2) / RAY`                |
//! | `ray_div(a,b)` | `(a * RAY + b / 2) / b`                  |
//! | `ray_to_wad(a)`| `(a + 1e9 / 2) / 1e9`                    |
//! | `wad_to_ray(a)`| `a * 1e9`                                |
//! | `percent_mul`  | `(v * p + 5_000) / 10_000`               |
//! | `percent_div`  | `(v * 10_000 + p / 2) / p`               |

use cosmwasm_std::{Uint128, Uint256};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// 1e18
pub const WAD: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000);

pub const HALF_WAD: Uint256 = Uint256::from_u128(500_000_000_000_000_000);

/// 1e27
pub const RAY: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000_000_000_000);

pub const HALF_RAY: Uint256 = Uint256::from_u128(500_000_000_000_000_000_000_000_000);

/// Ratio between ray and wad precision (1e9)
pub const WAD_RAY_RATIO: Uint256 = Uint256::from_u128(1_000_000_000);

const HALF_WAD_RAY_RATIO: Uint256 = Uint256::from_u128(500_000_000);

/// 100.00% expressed in basis points
pub const PERCENTAGE_FACTOR: Uint256 = Uint256::from_u128(10_000);

const HALF_PERCENT: Uint256 = Uint256::from_u128(5_000);

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MathError {
    #[error("Overflow")]
    Overflow,

    #[error("DivisionByZero")]
    DivisionByZero,
}

// ============================================================================
// Operations
// ============================================================================

/// Multiply two values and scale down by `scale`, rounding half up.
fn mul_scaled(a: Uint256, b: Uint256, scale: Uint256, half: Uint256) -> Result<Uint256, MathError> {
    if a.is_zero() || b.is_zero() {
        return Ok(Uint256::zero());
    }
    let product = a.checked_mul(b).map_err(|_| MathError::Overflow)?;
    let rounded = product.checked_add(half).map_err(|_| MathError::Overflow)?;
    Ok(rounded / scale)
}

/// Scale `a` up by `scale` and divide by `b`, rounding half up.
fn div_scaled(a: Uint256, b: Uint256, scale: Uint256) -> Result<Uint256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let scaled = a.checked_mul(scale).map_err(|_| MathError::Overflow)?;
    let rounded = scaled
        .checked_add(b / Uint256::from(2u8))
        .map_err(|_| MathError::Overflow)?;
    Ok(rounded / b)
}

pub fn wad_mul(a: Uint256, b: Uint256) -> Result<Uint256, MathError> {
    mul_scaled(a, b, WAD, HALF_WAD)
}

pub fn wad_div(a: Uint256, b: Uint256) -> Result<Uint256, MathError> {
    div_scaled(a, b, WAD)
}

pub fn ray_mul(a: Uint256, b: Uint256) -> Result<Uint256, MathError> {
    mul_scaled(a, b, RAY, HALF_RAY)
}

pub fn ray_div(a: Uint256, b: Uint256) -> Result<Uint256, MathError> {
    div_scaled(a, b, RAY)
}

/// Convert a ray to a wad, rounding half up.
pub fn ray_to_wad(a: Uint256) -> Result<Uint256, MathError> {
    let rounded = a
        .checked_add(HALF_WAD_RAY_RATIO)
        .map_err(|_| MathError::Overflow)?;
    Ok(rounded / WAD_RAY_RATIO)
}

pub fn wad_to_ray(a: Uint256) -> Result<Uint256, MathError> {
    a.checked_mul(WAD_RAY_RATIO).map_err(|_| MathError::Overflow)
}

/// Apply a percentage expressed in basis points (10_000 = 100%).
pub fn percent_mul(value: Uint256, percentage: Uint256) -> Result<Uint256, MathError> {
    mul_scaled(value, percentage, PERCENTAGE_FACTOR, HALF_PERCENT)
}

pub fn percent_div(value: Uint256, percentage: Uint256) -> Result<Uint256, MathError> {
    div_scaled(value, percentage, PERCENTAGE_FACTOR)
}

/// Narrow a 256-bit result back into a token amount.
pub fn to_uint128(value: Uint256) -> Result<Uint128, MathError> {
    Uint128::try_from(value).map_err(|_| MathError::Overflow)
}
