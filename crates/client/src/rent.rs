//! Rent lookups for sizing new accounts.

use std::future::Future;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::rent::Rent;

/// Source of rent-exemption minimums for newly created accounts.
pub trait RentLookup {
    /// Get the minimum balance for rent exemption of an account of the given
    /// size.
    fn minimum_balance(&self, data_len: usize) -> impl Future<Output = crate::Result<u64>>;
}

impl RentLookup for RpcClient {
    async fn minimum_balance(&self, data_len: usize) -> crate::Result<u64> {
        Ok(self
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }
}

/// Offline rent lookup backed by a fixed [`Rent`] sysvar value.
#[derive(Debug, Clone, Default)]
pub struct FixedRent(pub Rent);

impl RentLookup for FixedRent {
    async fn minimum_balance(&self, data_len: usize) -> crate::Result<u64> {
        Ok(self.0.minimum_balance(data_len))
    }
}
