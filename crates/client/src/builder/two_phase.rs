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
};

use super::BuildUpdatePlan;

/// Deliver price updates with full verification.
///
/// The whole guardian-signed VAA of each update is staged into an encoded
/// VAA account and verified by the Wormhole core bridge before any record is
/// posted. Per update the plan runs create, init, one or two writes and
/// verify, then one `post_update` per record, and finally closes the
/// encoded VAA account and reclaims the rent of every price update account.
#[derive(Debug, Clone, TypedBuilder)]
pub struct TwoPhaseUpdateBuilder {
    /// Receiver program.
    #[builder(default)]
    pub program: ReceiverProgram,
    /// Fee payer and write authority.
    pub payer: Pubkey,
    /// Parsed accumulator updates to deliver.
    pub updates: Vec<AccumulatorUpdateData>,
    /// Treasury to pay the posting fee into. Picked at random when unset.
    #[builder(default)]
    pub treasury_id: Option<u8>,
    /// Compute unit budgets.
    #[builder(default)]
    pub budgets: ComputeUnitBudgets,
}

impl BuildUpdatePlan for TwoPhaseUpdateBuilder {
    async fn build_plan(
        &self,
        keygen: &mut impl EphemeralKeygen,
        rent: &impl RentLookup,
    ) -> crate::Result<UpdatePlan> {
        let treasury_id = self.treasury_id.unwrap_or_else(rand::random);
        let mut plan = UpdatePlan::default();
        for update in &self.updates {
            let vaa_buffer = accumulator::vaa_buffer(&update.proof);
            let records = accumulator::merkle_price_updates(&update.proof);
            tracing::debug!(
                records = records.len(),
                vaa_len = vaa_buffer.len(),
                "building two-phase update plan"
            );

            let staged = self
                .program
                .wormhole
                .stage_encoded_vaa(
                    &self.payer,
                    Arc::new(keygen.generate()),
                    vaa_buffer,
                    rent,
                    &self.budgets,
                )
                .await?;
            let encoded_vaa = staged.address;
            plan.record_allocation(encoded_vaa);
            for instruction in staged.create_and_init {
                plan.push_post(instruction);
            }
            plan.push_post(staged.write_first);
            for instruction in staged.write_rest_and_verify {
                plan.push_post(instruction);
            }

            for record in records {
                let feed_id = accumulator::parse_feed_id(record)?;
                let price_update = Arc::new(keygen.generate());
                let address = price_update.pubkey();
                plan.record_allocation(address);
                plan.insert_price_update(feed_id, address)?;
                plan.push_post(PlanInstruction::with_signer(
                    self.program.post_update(
                        &self.payer,
                        &encoded_vaa,
                        &address,
                        record.clone(),
                        treasury_id,
                    ),
                    price_update,
                    self.budgets.post_update,
                ));
                plan.push_close(
                    address,
                    PlanInstruction::new(
                        self.program.reclaim_rent(&self.payer, &address),
                        self.budgets.reclaim_rent,
                    ),
                );
            }

            plan.push_close(encoded_vaa, staged.close);
        }
        plan.check_balanced()?;
        Ok(plan)
    }
}
