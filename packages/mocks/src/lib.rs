//! Mocks - External Collaborators for Integration Tests
//!
//! The bridge contracts treat the lending pool and the incentives controller as
//! external systems. These contracts implement just enough of both interfaces
//! (`common::yield_source`, `common::incentives`) to drive the bridge in
//! cw-multi-test:
//!
//! - `yield_source` - yield-bearing token whose balances grow with a
//!   liquidity index the test owner sets
//! - `incentives` - reward emission schedule and per-user claimable rewards
//!   the test owner accrues by hand

pub mod incentives;
pub mod yield_source;
