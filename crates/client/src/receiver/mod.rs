//! Receiver program support.
//!
//! Instruction constructors for the Pyth Solana receiver program: posting
//! price and TWAP updates into fresh update accounts and reclaiming their
//! rent afterwards.

use anchor_lang::{InstructionData, ToAccountMetas};
use pythnet_sdk::wire::v1::MerklePriceUpdate;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};

use crate::{pda, wormhole::WormholeProgram};

mod accounts;
mod instruction;

/// Instruction constructors for the receiver program.
#[derive(Debug, Clone, Copy)]
pub struct ReceiverProgram {
    /// Program address.
    pub id: Pubkey,
    /// The Wormhole core bridge the receiver verifies against.
    pub wormhole: WormholeProgram,
}

impl Default for ReceiverProgram {
    fn default() -> Self {
        Self {
            id: pyth_solana_receiver_sdk::ID,
            wormhole: WormholeProgram::default(),
        }
    }
}

impl ReceiverProgram {
    /// Find the receiver config PDA.
    pub fn config(&self) -> Pubkey {
        pda::find_config_address(&self.id)
    }

    /// Find a receiver treasury PDA.
    pub fn treasury(&self, treasury_id: u8) -> Pubkey {
        pda::find_treasury_address(&self.id, treasury_id)
    }

    /// Find the guardian set PDA the receiver verifies a VAA against.
    pub fn guardian_set(&self, index: u32) -> Pubkey {
        pda::find_guardian_set_address(&self.wormhole.id, index)
    }

    /// Build a `post_update` instruction consuming a verified encoded VAA.
    pub fn post_update(
        &self,
        payer: &Pubkey,
        encoded_vaa: &Pubkey,
        price_update_account: &Pubkey,
        update: MerklePriceUpdate,
        treasury_id: u8,
    ) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::PostUpdate {
                payer: *payer,
                encoded_vaa: *encoded_vaa,
                config: self.config(),
                treasury: self.treasury(treasury_id),
                price_update_account: *price_update_account,
                system_program: system_program::ID,
                write_authority: *payer,
            }
            .to_account_metas(None),
            data: instruction::PostUpdate {
                merkle_price_update: update,
                treasury_id,
            }
            .data(),
        }
    }

    /// Build a `post_update_atomic` instruction carrying the trimmed VAA
    /// inline.
    pub fn post_update_atomic(
        &self,
        payer: &Pubkey,
        guardian_set: &Pubkey,
        price_update_account: &Pubkey,
        vaa: Vec<u8>,
        update: MerklePriceUpdate,
        treasury_id: u8,
    ) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::PostUpdateAtomic {
                payer: *payer,
                guardian_set: *guardian_set,
                config: self.config(),
                treasury: self.treasury(treasury_id),
                price_update_account: *price_update_account,
                system_program: system_program::ID,
                write_authority: *payer,
            }
            .to_account_metas(None),
            data: instruction::PostUpdateAtomic {
                vaa,
                merkle_price_update: update,
                treasury_id,
            }
            .data(),
        }
    }

    /// Build a `post_twap_update` instruction consuming two verified encoded
    /// VAAs bracketing the averaging window.
    #[allow(clippy::too_many_arguments)]
    pub fn post_twap_update(
        &self,
        payer: &Pubkey,
        start_encoded_vaa: &Pubkey,
        end_encoded_vaa: &Pubkey,
        twap_update_account: &Pubkey,
        start_update: MerklePriceUpdate,
        end_update: MerklePriceUpdate,
        treasury_id: u8,
    ) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::PostTwapUpdate {
                payer: *payer,
                start_encoded_vaa: *start_encoded_vaa,
                end_encoded_vaa: *end_encoded_vaa,
                config: self.config(),
                treasury: self.treasury(treasury_id),
                twap_update_account: *twap_update_account,
                system_program: system_program::ID,
                write_authority: *payer,
            }
            .to_account_metas(None),
            data: instruction::PostTwapUpdate {
                start_merkle_price_update: start_update,
                end_merkle_price_update: end_update,
                treasury_id,
            }
            .data(),
        }
    }

    /// Build a `reclaim_rent` instruction closing a price update account.
    pub fn reclaim_rent(&self, payer: &Pubkey, price_update_account: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::ReclaimRent {
                payer: *payer,
                price_update_account: *price_update_account,
            }
            .to_account_metas(None),
            data: instruction::ReclaimRent {}.data(),
        }
    }

    /// Build a `reclaim_twap_rent` instruction closing a TWAP update
    /// account.
    pub fn reclaim_twap_rent(&self, payer: &Pubkey, twap_update_account: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.id,
            accounts: accounts::ReclaimRent {
                payer: *payer,
                price_update_account: *twap_update_account,
            }
            .to_account_metas(None),
            data: instruction::ReclaimTwapRent {}.data(),
        }
    }
}
