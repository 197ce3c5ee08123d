//! Byte-level helpers for Wormhole VAAs.
//!
//! A VAA starts with a 1-byte version, a 4-byte big-endian guardian set
//! index and a 1-byte signature count, followed by the signature entries and
//! the signed body.

/// The size of the VAA header preceding the signature entries.
pub const VAA_HEADER_SIZE: usize = 6;

/// The size of a guardian signature entry in a VAA: a 1-byte guardian index
/// followed by a 65-byte signature (including the recovery id).
pub const VAA_SIGNATURE_SIZE: usize = 66;

/// The start offset of the VAA bytes in an encoded VAA account. Before this
/// offset the account contains a header.
pub const VAA_START: usize = 46;

/// Writing a VAA to an encoded VAA account is split into two instructions
/// when the VAA is longer than this. The first instruction writes the first
/// `VAA_SPLIT_INDEX` bytes and the second one writes the rest.
pub const VAA_SPLIT_INDEX: usize = 721;

/// The default number of signatures kept by [`trim_signatures`]. This is the
/// maximum number of signatures such that the VAA still fits in a single
/// `post_update_atomic` transaction.
pub const DEFAULT_TRIMMED_SIGNATURE_COUNT: usize = 5;

/// Get the index of the guardian set that signed a VAA.
pub fn guardian_set_index(vaa: &[u8]) -> crate::Result<u32> {
    if vaa.len() < VAA_HEADER_SIZE {
        return Err(crate::Error::decode("vaa shorter than its header"));
    }
    let mut index = [0u8; 4];
    index.copy_from_slice(&vaa[1..5]);
    Ok(u32::from_be_bytes(index))
}

/// Get the number of signatures carried by a VAA.
pub fn signature_count(vaa: &[u8]) -> crate::Result<usize> {
    if vaa.len() < VAA_HEADER_SIZE {
        return Err(crate::Error::decode("vaa shorter than its header"));
    }
    Ok(vaa[5] as usize)
}

/// Trim the number of signatures of a VAA.
///
/// Returns the same VAA as the input, but carrying only the first `n`
/// signature entries, with the count byte rewritten to `n` and the body left
/// untouched. The input is never mutated.
///
/// A VAA typically carries signatures from two thirds of the guardians;
/// keeping fewer makes the VAA small enough to post in a single transaction,
/// at the price of a weaker verification level recorded on-chain.
pub fn trim_signatures(vaa: &[u8], n: usize) -> crate::Result<Vec<u8>> {
    let current = signature_count(vaa)?;
    if n > current {
        return Err(crate::Error::invalid_argument(format!(
            "cannot trim to {n} signatures, the vaa only carries {current}"
        )));
    }
    let signatures_end = VAA_HEADER_SIZE + current * VAA_SIGNATURE_SIZE;
    if vaa.len() < signatures_end {
        return Err(crate::Error::decode(
            "vaa shorter than its declared signature section",
        ));
    }
    let mut trimmed =
        Vec::with_capacity(vaa.len() - (current - n) * VAA_SIGNATURE_SIZE);
    trimmed.extend_from_slice(&vaa[..VAA_HEADER_SIZE + n * VAA_SIGNATURE_SIZE]);
    trimmed.extend_from_slice(&vaa[signatures_end..]);
    trimmed[5] = n as u8;
    Ok(trimmed)
}
