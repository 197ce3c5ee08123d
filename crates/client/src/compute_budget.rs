//! Compute unit budgets.
//!
//! Per-instruction upper bounds, measured against the deployed programs with
//! headroom. Plans report the budget of each instruction so callers can
//! request an accurate compute unit limit per transaction.

/// Budget for `init_encoded_vaa`.
pub const INIT_ENCODED_VAA_COMPUTE_BUDGET: u32 = 3_000;

/// Budget for `write_encoded_vaa`.
pub const WRITE_ENCODED_VAA_COMPUTE_BUDGET: u32 = 3_000;

/// Budget for `verify_encoded_vaa_v1`. Signature recovery dominates.
pub const VERIFY_ENCODED_VAA_COMPUTE_BUDGET: u32 = 350_000;

/// Budget for `close_encoded_vaa`.
pub const CLOSE_ENCODED_VAA_COMPUTE_BUDGET: u32 = 30_000;

/// Budget for `post_update`.
pub const POST_UPDATE_COMPUTE_BUDGET: u32 = 35_000;

/// Budget for `post_update_atomic`, which verifies guardian signatures
/// inline.
pub const POST_UPDATE_ATOMIC_COMPUTE_BUDGET: u32 = 170_000;

/// Budget for `post_twap_update`.
pub const POST_TWAP_UPDATE_COMPUTE_BUDGET: u32 = 50_000;

/// Budget for `reclaim_rent` and `reclaim_twap_rent`.
pub const RECLAIM_RENT_COMPUTE_BUDGET: u32 = 4_000;

/// Compute unit budgets used by the plan builders, overridable per
/// instruction kind.
#[derive(Debug, Clone, Copy)]
pub struct ComputeUnitBudgets {
    /// Budget for `init_encoded_vaa`.
    pub init_encoded_vaa: u32,
    /// Budget for `write_encoded_vaa`.
    pub write_encoded_vaa: u32,
    /// Budget for `verify_encoded_vaa_v1`.
    pub verify_encoded_vaa: u32,
    /// Budget for `close_encoded_vaa`.
    pub close_encoded_vaa: u32,
    /// Budget for `post_update`.
    pub post_update: u32,
    /// Budget for `post_update_atomic`.
    pub post_update_atomic: u32,
    /// Budget for `post_twap_update`.
    pub post_twap_update: u32,
    /// Budget for `reclaim_rent` and `reclaim_twap_rent`.
    pub reclaim_rent: u32,
}

impl Default for ComputeUnitBudgets {
    fn default() -> Self {
        Self {
            init_encoded_vaa: INIT_ENCODED_VAA_COMPUTE_BUDGET,
            write_encoded_vaa: WRITE_ENCODED_VAA_COMPUTE_BUDGET,
            verify_encoded_vaa: VERIFY_ENCODED_VAA_COMPUTE_BUDGET,
            close_encoded_vaa: CLOSE_ENCODED_VAA_COMPUTE_BUDGET,
            post_update: POST_UPDATE_COMPUTE_BUDGET,
            post_update_atomic: POST_UPDATE_ATOMIC_COMPUTE_BUDGET,
            post_twap_update: POST_TWAP_UPDATE_COMPUTE_BUDGET,
            reclaim_rent: RECLAIM_RENT_COMPUTE_BUDGET,
        }
    }
}
