use std::sync::Arc;

use pythnet_sdk::{messages::TwapMessage, wire::v1::AccumulatorUpdateData};
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

/// Deliver time-weighted average price updates.
///
/// Takes two accumulator updates bracketing the averaging window. Both VAAs
/// are staged and fully verified, then one `post_twap_update` per record
/// pair derives the average from the start and end cumulative values. The
/// pairs are validated before any instruction is built; a mismatch in feed
/// id, exponent or slot order between the two updates fails the whole call.
#[derive(Debug, Clone, TypedBuilder)]
pub struct TwapUpdateBuilder {
    /// Receiver program.
    #[builder(default)]
    pub program: ReceiverProgram,
    /// Fee payer and write authority.
    pub payer: Pubkey,
    /// Update opening the averaging window.
    pub start: AccumulatorUpdateData,
    /// Update closing the averaging window.
    pub end: AccumulatorUpdateData,
    /// Treasury to pay the posting fee into. Picked at random when unset.
    #[builder(default)]
    pub treasury_id: Option<u8>,
    /// Compute unit budgets.
    #[builder(default)]
    pub budgets: ComputeUnitBudgets,
}

fn validate_pair(start: &TwapMessage, end: &TwapMessage) -> crate::Result<()> {
    if start.feed_id != end.feed_id {
        return Err(crate::Error::invalid_argument(format!(
            "feed id mismatch between start and end update: {} vs {}",
            hex::encode(start.feed_id),
            hex::encode(end.feed_id),
        )));
    }
    if start.exponent != end.exponent {
        return Err(crate::Error::invalid_argument(format!(
            "exponent mismatch between start and end update: {} vs {}",
            start.exponent, end.exponent,
        )));
    }
    if end.publish_slot <= start.publish_slot {
        return Err(crate::Error::invalid_argument(
            "end update does not come after the start update",
        ));
    }
    // The receiver only accepts first-price-of-timestamp messages.
    if start.prev_publish_time >= start.publish_time
        || end.prev_publish_time >= end.publish_time
    {
        return Err(crate::Error::invalid_argument(
            "update is not the first price of its timestamp",
        ));
    }
    Ok(())
}

impl TwapUpdateBuilder {
    fn validated_pairs(&self) -> crate::Result<Vec<(TwapMessage, TwapMessage)>> {
        let start_records = accumulator::merkle_price_updates(&self.start.proof);
        let end_records = accumulator::merkle_price_updates(&self.end.proof);
        if start_records.len() != end_records.len() {
            return Err(crate::Error::invalid_argument(format!(
                "start update carries {} records but end update carries {}",
                start_records.len(),
                end_records.len(),
            )));
        }
        start_records
            .iter()
            .zip(end_records)
            .map(|(start, end)| {
                let start = accumulator::parse_twap_message(start)?;
                let end = accumulator::parse_twap_message(end)?;
                validate_pair(&start, &end)?;
                Ok((start, end))
            })
            .collect()
    }
}

impl BuildUpdatePlan for TwapUpdateBuilder {
    async fn build_plan(
        &self,
        keygen: &mut impl EphemeralKeygen,
        rent: &impl RentLookup,
    ) -> crate::Result<UpdatePlan> {
        let pairs = self.validated_pairs()?;
        tracing::debug!(pairs = pairs.len(), "building twap update plan");

        let treasury_id = self.treasury_id.unwrap_or_else(rand::random);
        let mut plan = UpdatePlan::default();

        let wormhole = &self.program.wormhole;
        let start_staged = wormhole
            .stage_encoded_vaa(
                &self.payer,
                Arc::new(keygen.generate()),
                accumulator::vaa_buffer(&self.start.proof),
                rent,
                &self.budgets,
            )
            .await?;
        let end_staged = wormhole
            .stage_encoded_vaa(
                &self.payer,
                Arc::new(keygen.generate()),
                accumulator::vaa_buffer(&self.end.proof),
                rent,
                &self.budgets,
            )
            .await?;
        plan.record_allocation(start_staged.address);
        plan.record_allocation(end_staged.address);

        // Interleave the two stagings so they pack into fewer transactions;
        // each account still goes through init, write, verify in order.
        for instruction in start_staged
            .create_and_init
            .into_iter()
            .chain([start_staged.write_first])
            .chain(end_staged.create_and_init)
            .chain([end_staged.write_first])
            .chain(start_staged.write_rest_and_verify)
            .chain(end_staged.write_rest_and_verify)
        {
            plan.push_post(instruction);
        }

        let start_records = accumulator::merkle_price_updates(&self.start.proof);
        let end_records = accumulator::merkle_price_updates(&self.end.proof);
        for ((start_record, end_record), (start_message, _)) in
            start_records.iter().zip(end_records).zip(&pairs)
        {
            let twap_update = Arc::new(keygen.generate());
            let address = twap_update.pubkey();
            plan.record_allocation(address);
            plan.insert_twap_update(pyth_sdk::Identifier::new(start_message.feed_id), address)?;
            plan.push_post(PlanInstruction::with_signer(
                self.program.post_twap_update(
                    &self.payer,
                    &start_staged.address,
                    &end_staged.address,
                    &address,
                    start_record.clone(),
                    end_record.clone(),
                    treasury_id,
                ),
                twap_update,
                self.budgets.post_twap_update,
            ));
            plan.push_close(
                address,
                PlanInstruction::new(
                    self.program.reclaim_twap_rent(&self.payer, &address),
                    self.budgets.reclaim_rent,
                ),
            );
        }

        plan.push_close(start_staged.address, start_staged.close);
        plan.push_close(end_staged.address, end_staged.close);
        plan.check_balanced()?;
        Ok(plan)
    }
}
