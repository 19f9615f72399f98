//! Common - Shared Types and Utilities for the aToken Bridge Contracts
//!
//! This package provides the fixed-point math, cross-domain payloads and
//! collaborator interfaces shared by the L1 and L2 bridge contracts.

pub mod incentives;
pub mod math;
pub mod messaging;
pub mod spell;
pub mod yield_source;

pub use math::{
    percent_div, percent_mul, ray_div, ray_mul, ray_to_wad, wad_div, wad_mul, wad_to_ray,
    MathError, RAY, WAD,
};
pub use messaging::{
    GovernancePayload, L1ToL2Payload, L2HandlerMsg, L2ToL1Payload, MessengerExecuteMsg,
    MessengerQueryMsg,
};
