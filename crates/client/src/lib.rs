//! Client-side instruction builders for the Pyth Solana receiver program.
//!
//! This crate turns guardian-signed accumulator updates (as served by Hermes)
//! into ordered instruction plans that post price updates, TWAP updates, or
//! partially verified price updates on Solana, together with the ephemeral
//! accounts those instructions create and the cleanup instructions that
//! reclaim their rent.

/// Error type.
pub mod error;

/// Accumulator update decoding.
pub mod accumulator;

/// VAA helpers.
pub mod vaa;

/// Functions for constructing Program Derived Addresses.
pub mod pda;

/// Compute unit budgets.
pub mod compute_budget;

/// Instruction plans and ephemeral account bookkeeping.
pub mod plan;

/// Rent lookups for sizing new accounts.
pub mod rent;

/// Wormhole core bridge support.
pub mod wormhole;

/// Receiver program support.
pub mod receiver;

/// Update plan builders.
pub mod builder;

/// Hermes client.
pub mod hermes;

#[cfg(test)]
#[path = "../tests/fixtures/mod.rs"]
mod fixtures;

pub use error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use builder::{
    AtomicUpdateBuilder, BuildUpdatePlan, TwapUpdateBuilder, TwoPhaseUpdateBuilder,
};
pub use hermes::Hermes;
pub use plan::{EphemeralKeygen, FeedAddressMap, PlanInstruction, RandomKeygen, UpdatePlan};
pub use receiver::ReceiverProgram;
pub use rent::{FixedRent, RentLookup};
pub use wormhole::WormholeProgram;
