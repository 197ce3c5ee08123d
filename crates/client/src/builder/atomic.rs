use std::sync::Arc;

use pythnet_sdk::wire::v1::AccumulatorUpdateData;
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use typed_builder::TypedBuilder;

use crate::{
    accumulator,
    compute_budget::ComputeUnitBudgets,
    plan::{EphemeralKeygen, PlanInstruction, UpdatePlan},
    receiver::ReceiverProgram,
    rent::RentLookup,
    vaa,
};

use super::BuildUpdatePlan;

/// Deliver price updates with partial verification.
///
/// Each record becomes one self-contained `post_update_atomic` instruction
/// carrying the signature-trimmed VAA inline, so no encoded VAA account is
/// ever created. Cheaper and faster than the two-phase path, but the posted
/// updates record a weaker verification level.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AtomicUpdateBuilder {
    /// Receiver program.
    #[builder(default)]
    pub program: ReceiverProgram,
    /// Fee payer and write authority.
    pub payer: Pubkey,
    /// Parsed accumulator updates to deliver.
    pub updates: Vec<AccumulatorUpdateData>,
    /// Number of guardian signatures to keep per record.
    #[builder(default = vaa::DEFAULT_TRIMMED_SIGNATURE_COUNT)]
    pub num_signatures: usize,
    /// Treasury to pay the posting fee into. Picked at random when unset.
    #[builder(default)]
    pub treasury_id: Option<u8>,
    /// Compute unit budgets.
    #[builder(default)]
    pub budgets: ComputeUnitBudgets,
}

impl BuildUpdatePlan for AtomicUpdateBuilder {
    async fn build_plan(
        &self,
        keygen: &mut impl EphemeralKeygen,
        _rent: &impl RentLookup,
    ) -> crate::Result<UpdatePlan> {
        let treasury_id = self.treasury_id.unwrap_or_else(rand::random);
        let mut plan = UpdatePlan::default();
        for update in &self.updates {
            let vaa_buffer = accumulator::vaa_buffer(&update.proof);
            // One guardian set lookup per signed message, shared by all of
            // its records.
            let guardian_set = self
                .program
                .guardian_set(vaa::guardian_set_index(vaa_buffer)?);
            let records = accumulator::merkle_price_updates(&update.proof);
            tracing::debug!(records = records.len(), "building atomic update plan");
            for record in records {
                let trimmed = vaa::trim_signatures(vaa_buffer, self.num_signatures)?;
                let feed_id = accumulator::parse_feed_id(record)?;
                let price_update = Arc::new(keygen.generate());
                let address = price_update.pubkey();
                plan.record_allocation(address);
                plan.insert_price_update(feed_id, address)?;
                plan.push_post(PlanInstruction::with_signer(
                    self.program.post_update_atomic(
                        &self.payer,
                        &guardian_set,
                        &address,
                        trimmed,
                        record.clone(),
                        treasury_id,
                    ),
                    price_update,
                    self.budgets.post_update_atomic,
                ));
                plan.push_close(
                    address,
                    PlanInstruction::new(
                        self.program.reclaim_rent(&self.payer, &address),
                        self.budgets.reclaim_rent,
                    ),
                );
            }
        }
        plan.check_balanced()?;
        Ok(plan)
    }
}
