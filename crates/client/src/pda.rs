//! Functions for constructing Program Derived Addresses.

use solana_sdk::pubkey::Pubkey;

const CONFIG_SEED: &[u8] = b"config";
const TREASURY_SEED: &[u8] = b"treasury";
const GUARDIAN_SET_SEED: &[u8] = b"GuardianSet";

/// Find the config PDA of the receiver program.
pub fn find_config_address(receiver_program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED], receiver_program_id).0
}

/// Find a treasury PDA of the receiver program.
///
/// The receiver maintains 256 treasuries so that concurrent updates paying
/// the posting fee do not all contend on one account.
pub fn find_treasury_address(receiver_program_id: &Pubkey, treasury_id: u8) -> Pubkey {
    Pubkey::find_program_address(&[TREASURY_SEED, &[treasury_id]], receiver_program_id).0
}

/// Find the guardian set PDA of the Wormhole program for a guardian set
/// index.
pub fn find_guardian_set_address(wormhole_program_id: &Pubkey, index: u32) -> Pubkey {
    Pubkey::find_program_address(
        &[GUARDIAN_SET_SEED, &index.to_be_bytes()],
        wormhole_program_id,
    )
    .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_treasuries() {
        let program = pyth_solana_receiver_sdk::ID;
        let a = find_treasury_address(&program, 0);
        let b = find_treasury_address(&program, 1);
        assert_ne!(a, b);
        assert_eq!(a, find_treasury_address(&program, 0));
    }

    #[test]
    fn guardian_set_depends_on_index() {
        let program = crate::wormhole::WORMHOLE_PROGRAM_ID;
        assert_ne!(
            find_guardian_set_address(&program, 4),
            find_guardian_set_address(&program, 5),
        );
    }
}
