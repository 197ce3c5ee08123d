//! Update plan builders.
//!
//! Three delivery strategies share one output contract: an [`UpdatePlan`]
//! with a populated feed address map. [`AtomicUpdateBuilder`] posts each
//! record in a single partially verified instruction,
//! [`TwoPhaseUpdateBuilder`] verifies the full guardian signature set in an
//! encoded VAA account first, and [`TwapUpdateBuilder`] combines two
//! bracketing updates into time-weighted averages.

use std::future::Future;

use crate::{
    plan::{EphemeralKeygen, UpdatePlan},
    rent::RentLookup,
};

mod atomic;
mod twap;
mod two_phase;

pub use self::{
    atomic::AtomicUpdateBuilder, twap::TwapUpdateBuilder, two_phase::TwoPhaseUpdateBuilder,
};

/// Build an [`UpdatePlan`] out of parsed accumulator updates.
pub trait BuildUpdatePlan {
    /// Build the plan, drawing ephemeral account identities from `keygen`
    /// and rent minimums from `rent`.
    fn build_plan(
        &self,
        keygen: &mut impl EphemeralKeygen,
        rent: &impl RentLookup,
    ) -> impl Future<Output = crate::Result<UpdatePlan>>;
}
