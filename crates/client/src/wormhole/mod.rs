//! Wormhole core bridge support.
//!
//! The two-phase and TWAP builders stage the full guardian-signed VAA into
//! an encoded VAA account owned by the core bridge, ask the bridge to verify
//! every signature, and close the account once the receiver has consumed it.

use std::sync::Arc;

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
};

use crate::{
    compute_budget::ComputeUnitBudgets,
    pda,
    plan::PlanInstruction,
    rent::RentLookup,
    vaa::{self, VAA_SPLIT_INDEX, VAA_START},
};

mod accounts;
mod instruction;

/// Wormhole Core Bridge Program Address.
pub const WORMHOLE_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    241, 11, 180, 229, 13, 86, 253, 161, 61, 254, 31, 50, 155, 141, 57, 61, 210, 74, 1, 69, 145,
    225, 131, 22, 151, 148, 13, 124, 52, 163, 141, 221,
]);

/// Instruction constructors for the Wormhole core bridge program.
#[derive(Debug, Clone, Copy)]
pub struct WormholeProgram {
    /// Program address.
    pub id: Pubkey,
}

impl Default for WormholeProgram {
    fn default() -> Self {
        Self {
            id: WORMHOLE_PROGRAM_ID,
        }
    }
}

/// The staged lifecycle of one encoded VAA account, as grouped instruction
/// steps. Each step must land in full before the next one starts; steps of
/// independent encoded VAAs may interleave.
pub struct EncodedVaa {
    /// Address of the encoded VAA account.
    pub address: Pubkey,
    /// Account creation and `init_encoded_vaa`, signed by the new account.
    pub create_and_init: Vec<PlanInstruction>,
    /// First write, covering at most [`VAA_SPLIT_INDEX`] bytes.
    pub write_first: PlanInstruction,
    /// Second write for VAAs longer than [`VAA_SPLIT_INDEX`], plus the
    /// verification instruction.
    pub write_rest_and_verify: Vec<PlanInstruction>,
    /// `close_encoded_vaa`, reclaiming the account's rent.
    pub close: PlanInstruction,
}

impl WormholeProgram {
    /// Create the encoded VAA account, owned by the bridge and sized for a
    /// VAA of `vaa_len` bytes.
    pub fn create_encoded_vaa_account(
        &self,
        payer: &Pubkey,
        encoded_vaa: &Pubkey,
        vaa_len: usize,
        lamports: u64,
    ) -> Instruction {
        system_instruction::create_account(
            payer,
            encoded_vaa,
            lamports,
            (vaa_len + VAA_START) as u64,
            &self.id,
        )
    }

    /// Build an `init_encoded_vaa` instruction.
    pub fn init_encoded_vaa(&self, write_authority: &Pubkey, encoded_vaa: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::InitEncodedVaa {
                write_authority: *write_authority,
                encoded_vaa: *encoded_vaa,
            }
            .to_account_metas(None),
            data: instruction::InitEncodedVaa {}.data(),
        }
    }

    /// Build a `write_encoded_vaa` instruction writing `data` at `index`.
    pub fn write_encoded_vaa(
        &self,
        write_authority: &Pubkey,
        draft_vaa: &Pubkey,
        index: u32,
        data: &[u8],
    ) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::WriteEncodedVaa {
                write_authority: *write_authority,
                draft_vaa: *draft_vaa,
            }
            .to_account_metas(None),
            data: instruction::WriteEncodedVaa {
                index,
                data: data.to_owned(),
            }
            .data(),
        }
    }

    /// Build a `verify_encoded_vaa_v1` instruction.
    pub fn verify_encoded_vaa_v1(
        &self,
        write_authority: &Pubkey,
        draft_vaa: &Pubkey,
        guardian_set: &Pubkey,
    ) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::VerifyEncodedVaaV1 {
                write_authority: *write_authority,
                draft_vaa: *draft_vaa,
                guardian_set: *guardian_set,
            }
            .to_account_metas(None),
            data: instruction::VerifyEncodedVaaV1 {}.data(),
        }
    }

    /// Build a `close_encoded_vaa` instruction.
    pub fn close_encoded_vaa(&self, write_authority: &Pubkey, encoded_vaa: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::CloseEncodedVaa {
                write_authority: *write_authority,
                encoded_vaa: *encoded_vaa,
            }
            .to_account_metas(None),
            data: instruction::CloseEncodedVaa {}.data(),
        }
    }

    /// Stage a full VAA into a fresh encoded VAA account.
    ///
    /// Produces the whole lifecycle: create the account sized for the VAA,
    /// initialize it, write the VAA bytes in one or two chunks, verify every
    /// guardian signature against the guardian set the VAA header names, and
    /// close the account afterwards. The guardian set address is derived
    /// from the VAA itself.
    pub async fn stage_encoded_vaa(
        &self,
        payer: &Pubkey,
        encoded_vaa: Arc<Keypair>,
        vaa: &[u8],
        rent: &impl RentLookup,
        budgets: &ComputeUnitBudgets,
    ) -> crate::Result<EncodedVaa> {
        let address = encoded_vaa.pubkey();
        let guardian_set =
            pda::find_guardian_set_address(&self.id, vaa::guardian_set_index(vaa)?);
        let lamports = rent.minimum_balance(vaa.len() + VAA_START).await?;

        let create_and_init = vec![
            PlanInstruction::with_signer(
                self.create_encoded_vaa_account(payer, &address, vaa.len(), lamports),
                encoded_vaa.clone(),
                budgets.init_encoded_vaa,
            ),
            PlanInstruction::new(
                self.init_encoded_vaa(payer, &address),
                budgets.init_encoded_vaa,
            ),
        ];

        let first_chunk = &vaa[..vaa.len().min(VAA_SPLIT_INDEX)];
        let write_first = PlanInstruction::new(
            self.write_encoded_vaa(payer, &address, 0, first_chunk),
            budgets.write_encoded_vaa,
        );

        let mut write_rest_and_verify = Vec::with_capacity(2);
        if vaa.len() > VAA_SPLIT_INDEX {
            write_rest_and_verify.push(PlanInstruction::new(
                self.write_encoded_vaa(
                    payer,
                    &address,
                    VAA_SPLIT_INDEX as u32,
                    &vaa[VAA_SPLIT_INDEX..],
                ),
                budgets.write_encoded_vaa,
            ));
        }
        write_rest_and_verify.push(PlanInstruction::new(
            self.verify_encoded_vaa_v1(payer, &address, &guardian_set),
            budgets.verify_encoded_vaa,
        ));

        let close = PlanInstruction::new(
            self.close_encoded_vaa(payer, &address),
            budgets.close_encoded_vaa,
        );

        Ok(EncodedVaa {
            address,
            create_and_init,
            write_first,
            write_rest_and_verify,
            close,
        })
    }
}
