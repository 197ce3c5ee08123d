//! Structural decoding of accumulator updates.
//!
//! No cryptographic verification happens here. Decoding fails for truncated
//! containers, record counts that disagree with the payload and proofs whose
//! length is not a whole number of hash nodes; that is the receiver
//! program's parser behaviour mirrored client-side.

use base64::{engine::general_purpose::STANDARD, Engine};
use pyth_sdk::Identifier;
use pythnet_sdk::{
    messages::{PriceFeedMessage, TwapMessage},
    wire::{
        from_slice,
        v1::{AccumulatorUpdateData, MerklePriceUpdate, Proof},
    },
};

/// Variant byte of a price feed message.
pub const PRICE_FEED_MESSAGE_VARIANT: u8 = 0;

/// Variant byte of a TWAP message.
pub const TWAP_MESSAGE_VARIANT: u8 = 1;

/// Parse an [`AccumulatorUpdateData`] from raw bytes.
pub fn parse_accumulator_update(data: &[u8]) -> crate::Result<AccumulatorUpdateData> {
    AccumulatorUpdateData::try_from_slice(data).map_err(crate::Error::decode)
}

/// Parse an [`AccumulatorUpdateData`] from a base64 payload, as returned by
/// Hermes.
pub fn parse_accumulator_update_base64(data: &str) -> crate::Result<AccumulatorUpdateData> {
    let data = STANDARD.decode(data)?;
    parse_accumulator_update(&data)
}

/// Get the VAA buffer of a proof.
pub fn vaa_buffer(proof: &Proof) -> &[u8] {
    match proof {
        Proof::WormholeMerkle { vaa, .. } => vaa.as_ref(),
    }
}

/// Get the Merkle-proved price records of a proof, in container order.
pub fn merkle_price_updates(proof: &Proof) -> &[MerklePriceUpdate] {
    match proof {
        Proof::WormholeMerkle { updates, .. } => updates,
    }
}

fn message_payload(update: &MerklePriceUpdate, variant: u8) -> crate::Result<&[u8]> {
    let data = update.message.as_ref().as_slice();
    match data.first() {
        None => Err(crate::Error::decode("empty update message")),
        Some(&found) if found != variant => Err(crate::Error::decode(format!(
            "unexpected message variant {found}, expected {variant}"
        ))),
        Some(_) => Ok(&data[1..]),
    }
}

/// Parse the price feed message carried by a Merkle record.
pub fn parse_price_feed_message(update: &MerklePriceUpdate) -> crate::Result<PriceFeedMessage> {
    let payload = message_payload(update, PRICE_FEED_MESSAGE_VARIANT)?;
    from_slice::<byteorder::BE, _>(payload)
        .map_err(|err| crate::Error::decode(format!("deserialize price feed message: {err}")))
}

/// Parse the TWAP message carried by a Merkle record.
pub fn parse_twap_message(update: &MerklePriceUpdate) -> crate::Result<TwapMessage> {
    let payload = message_payload(update, TWAP_MESSAGE_VARIANT)?;
    from_slice::<byteorder::BE, _>(payload)
        .map_err(|err| crate::Error::decode(format!("deserialize twap message: {err}")))
}

/// Parse the feed id of a price feed record.
pub fn parse_feed_id(update: &MerklePriceUpdate) -> crate::Result<Identifier> {
    Ok(Identifier::new(parse_price_feed_message(update)?.feed_id))
}

/// Parse the feed id of a TWAP record.
pub fn parse_twap_feed_id(update: &MerklePriceUpdate) -> crate::Result<Identifier> {
    Ok(Identifier::new(parse_twap_message(update)?.feed_id))
}
