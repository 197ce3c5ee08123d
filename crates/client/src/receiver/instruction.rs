use anchor_lang::{
    prelude::{borsh, AnchorSerialize},
    Discriminator, InstructionData,
};
use pythnet_sdk::wire::v1::MerklePriceUpdate;

#[derive(AnchorSerialize)]
pub(super) struct PostUpdate {
    pub(super) merkle_price_update: MerklePriceUpdate,
    pub(super) treasury_id: u8,
}

impl Discriminator for PostUpdate {
    const DISCRIMINATOR: &'static [u8] = &[133, 95, 207, 175, 11, 79, 118, 44];
}

impl InstructionData for PostUpdate {}

#[derive(AnchorSerialize)]
pub(super) struct PostUpdateAtomic {
    pub(super) vaa: Vec<u8>,
    pub(super) merkle_price_update: MerklePriceUpdate,
    pub(super) treasury_id: u8,
}

impl Discriminator for PostUpdateAtomic {
    const DISCRIMINATOR: &'static [u8] = &[49, 172, 84, 192, 175, 180, 52, 234];
}

impl InstructionData for PostUpdateAtomic {}

#[derive(AnchorSerialize)]
pub(super) struct PostTwapUpdate {
    pub(super) start_merkle_price_update: MerklePriceUpdate,
    pub(super) end_merkle_price_update: MerklePriceUpdate,
    pub(super) treasury_id: u8,
}

impl Discriminator for PostTwapUpdate {
    const DISCRIMINATOR: &'static [u8] = &[232, 176, 212, 105, 69, 121, 18, 30];
}

impl InstructionData for PostTwapUpdate {}

#[derive(AnchorSerialize)]
pub(super) struct ReclaimRent {}

impl Discriminator for ReclaimRent {
    const DISCRIMINATOR: &'static [u8] = &[218, 200, 19, 197, 227, 89, 192, 22];
}

impl InstructionData for ReclaimRent {}

#[derive(AnchorSerialize)]
pub(super) struct ReclaimTwapRent {}

impl Discriminator for ReclaimTwapRent {
    const DISCRIMINATOR: &'static [u8] = &[84, 3, 32, 238, 108, 217, 135, 39];
}

impl InstructionData for ReclaimTwapRent {}
