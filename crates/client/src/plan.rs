//! Instruction plans and ephemeral account bookkeeping.
//!
//! A plan is pure data. Nothing on-chain is touched until the caller hands
//! the plan to a transaction batcher and submits it, so abandoning a plan
//! costs nothing.

use std::sync::Arc;

use indexmap::IndexMap;
use pyth_sdk::Identifier;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer};

/// Mapping from feed id to the account a plan delivers that feed into.
///
/// Insertion order follows record order within the accumulator update.
pub type FeedAddressMap = IndexMap<Identifier, Pubkey>;

/// One instruction of a plan, together with the ephemeral signers it
/// requires (the fee payer is implicit) and its compute unit budget.
#[derive(Debug, Clone)]
pub struct PlanInstruction {
    /// The instruction payload.
    pub instruction: Instruction,
    /// Ephemeral accounts that must sign the transaction carrying this
    /// instruction.
    pub ephemeral_signers: Vec<Arc<Keypair>>,
    /// Compute unit budget of this instruction, if known.
    pub compute_units: Option<u32>,
}

impl PlanInstruction {
    /// Create a plan instruction with no ephemeral signers.
    pub fn new(instruction: Instruction, compute_units: u32) -> Self {
        Self {
            instruction,
            ephemeral_signers: Vec::new(),
            compute_units: Some(compute_units),
        }
    }

    /// Create a plan instruction signed by an ephemeral account.
    pub fn with_signer(instruction: Instruction, signer: Arc<Keypair>, compute_units: u32) -> Self {
        Self {
            instruction,
            ephemeral_signers: vec![signer],
            compute_units: Some(compute_units),
        }
    }
}

/// Source of fresh ephemeral account identities.
///
/// Every ephemeral account of a plan must come from a fresh keypair; the
/// builders never reuse an identity across records or across calls.
pub trait EphemeralKeygen {
    /// Generate a fresh keypair.
    fn generate(&mut self) -> Keypair;
}

/// [`EphemeralKeygen`] backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomKeygen;

impl EphemeralKeygen for RandomKeygen {
    fn generate(&mut self) -> Keypair {
        Keypair::new()
    }
}

/// An ordered instruction plan delivering price or TWAP updates.
///
/// Instructions are grouped into three phases that must execute in order:
/// posting instructions, caller-supplied consumer instructions, and cleanup
/// instructions reclaiming the rent of every ephemeral account the plan
/// created.
#[derive(Debug, Default)]
pub struct UpdatePlan {
    post: Vec<PlanInstruction>,
    consume: Vec<PlanInstruction>,
    close: Vec<(Pubkey, PlanInstruction)>,
    allocated: Vec<Pubkey>,
    price_updates: FeedAddressMap,
    twap_updates: FeedAddressMap,
}

impl UpdatePlan {
    /// Append a posting instruction.
    pub fn push_post(&mut self, instruction: PlanInstruction) {
        self.post.push(instruction);
    }

    /// Append a cleanup instruction closing `target`.
    pub fn push_close(&mut self, target: Pubkey, instruction: PlanInstruction) {
        self.close.push((target, instruction));
    }

    /// Record the allocation of an ephemeral account.
    pub fn record_allocation(&mut self, address: Pubkey) {
        self.allocated.push(address);
    }

    /// Record that `feed_id` is delivered into the price update account at
    /// `address`.
    pub fn insert_price_update(
        &mut self,
        feed_id: Identifier,
        address: Pubkey,
    ) -> crate::Result<()> {
        if self.price_updates.insert(feed_id, address).is_some() {
            return Err(crate::Error::invalid_argument(format!(
                "feed {feed_id} appears more than once in the update"
            )));
        }
        Ok(())
    }

    /// Record that `feed_id` is delivered into the TWAP update account at
    /// `address`.
    pub fn insert_twap_update(
        &mut self,
        feed_id: Identifier,
        address: Pubkey,
    ) -> crate::Result<()> {
        if self.twap_updates.insert(feed_id, address).is_some() {
            return Err(crate::Error::invalid_argument(format!(
                "feed {feed_id} appears more than once in the update"
            )));
        }
        Ok(())
    }

    /// Delivered price update accounts, in record order.
    pub fn price_updates(&self) -> &FeedAddressMap {
        &self.price_updates
    }

    /// Delivered TWAP update accounts, in record order.
    pub fn twap_updates(&self) -> &FeedAddressMap {
        &self.twap_updates
    }

    /// Get the price update account delivering `feed_id`.
    pub fn price_update(&self, feed_id: &Identifier) -> crate::Result<Pubkey> {
        self.price_updates
            .get(feed_id)
            .copied()
            .ok_or(crate::Error::MissingFeed(*feed_id))
    }

    /// Get the TWAP update account delivering `feed_id`.
    pub fn twap_update(&self, feed_id: &Identifier) -> crate::Result<Pubkey> {
        self.twap_updates
            .get(feed_id)
            .copied()
            .ok_or(crate::Error::MissingFeed(*feed_id))
    }

    /// Add consumer instructions reading the price update account of
    /// `feed_id`. Fails if the plan does not deliver that feed.
    pub fn add_price_consumer(
        &mut self,
        feed_id: &Identifier,
        consumer: impl FnOnce(Pubkey) -> crate::Result<Vec<Instruction>>,
    ) -> crate::Result<()> {
        let address = self.price_update(feed_id)?;
        for instruction in consumer(address)? {
            self.consume.push(PlanInstruction {
                instruction,
                ephemeral_signers: Vec::new(),
                compute_units: None,
            });
        }
        Ok(())
    }

    /// Add consumer instructions reading the TWAP update account of
    /// `feed_id`. Fails if the plan does not deliver that feed.
    pub fn add_twap_consumer(
        &mut self,
        feed_id: &Identifier,
        consumer: impl FnOnce(Pubkey) -> crate::Result<Vec<Instruction>>,
    ) -> crate::Result<()> {
        let address = self.twap_update(feed_id)?;
        for instruction in consumer(address)? {
            self.consume.push(PlanInstruction {
                instruction,
                ephemeral_signers: Vec::new(),
                compute_units: None,
            });
        }
        Ok(())
    }

    /// Posting instructions, in execution order.
    pub fn post_instructions(&self) -> &[PlanInstruction] {
        &self.post
    }

    /// Cleanup instructions and the ephemeral account each one closes.
    pub fn close_instructions(&self) -> &[(Pubkey, PlanInstruction)] {
        &self.close
    }

    /// Every ephemeral account allocated by this plan.
    pub fn allocated_accounts(&self) -> &[Pubkey] {
        &self.allocated
    }

    /// All distinct ephemeral signers of the plan.
    pub fn signers(&self) -> Vec<Arc<Keypair>> {
        let mut seen = Vec::<Arc<Keypair>>::new();
        let all = self
            .post
            .iter()
            .chain(self.close.iter().map(|(_, instruction)| instruction));
        for instruction in all {
            for signer in &instruction.ephemeral_signers {
                if !seen.iter().any(|s| s.pubkey() == signer.pubkey()) {
                    seen.push(signer.clone());
                }
            }
        }
        seen
    }

    /// Check that every allocated ephemeral account is closed exactly once
    /// and that no cleanup instruction targets an account the plan did not
    /// allocate.
    pub fn check_balanced(&self) -> crate::Result<()> {
        for address in &self.allocated {
            let count = self
                .close
                .iter()
                .filter(|(target, _)| target == address)
                .count();
            if count != 1 {
                return Err(crate::Error::unknown(format!(
                    "ephemeral account {address} is closed {count} times"
                )));
            }
        }
        if let Some((target, _)) = self
            .close
            .iter()
            .find(|(target, _)| !self.allocated.contains(target))
        {
            return Err(crate::Error::unknown(format!(
                "cleanup instruction targets unallocated account {target}"
            )));
        }
        Ok(())
    }

    /// Flatten the plan into execution order: posting instructions, then
    /// consumer instructions, then cleanup instructions.
    pub fn into_instructions(self) -> Vec<PlanInstruction> {
        let mut all = self.post;
        all.extend(self.consume);
        all.extend(self.close.into_iter().map(|(_, instruction)| instruction));
        all
    }

    /// Merge another plan behind this one, phase by phase.
    pub fn merge(&mut self, other: UpdatePlan) {
        self.post.extend(other.post);
        self.consume.extend(other.consume);
        self.close.extend(other.close);
        self.allocated.extend(other.allocated);
        self.price_updates.extend(other.price_updates);
        self.twap_updates.extend(other.twap_updates);
    }
}
