//! Hermes client.
//!
//! Fetches accumulator updates from a Hermes instance, either as one-shot
//! latest snapshots or as an SSE stream, and decodes the binary payloads
//! into [`AccumulatorUpdateData`] ready for the plan builders.

use std::fmt;

use eventsource_stream::Eventsource;
use futures_util::{Stream, TryStreamExt};
use pyth_sdk::Identifier;
use pythnet_sdk::wire::v1::AccumulatorUpdateData;
use reqwest::{Client, IntoUrl, Url};

use crate::accumulator;

/// Default base URL for Hermes.
pub const DEFAULT_HERMES_BASE: &str = "https://hermes.pyth.network";

/// The SSE endpoint of price updates stream.
pub const PRICE_STREAM: &str = "/v2/updates/price/stream";

/// The endpoint of latest price update.
pub const PRICE_LATEST: &str = "/v2/updates/price/latest";

/// Hermes Client.
#[derive(Debug, Clone)]
pub struct Hermes {
    base: Url,
    client: Client,
}

fn get_query<'a>(
    feed_ids: impl IntoIterator<Item = &'a Identifier>,
    encoding: Option<EncodingType>,
) -> Vec<(&'static str, String)> {
    feed_ids
        .into_iter()
        .map(|id| ("ids[]", id.to_hex()))
        .chain(encoding.map(|encoding| ("encoding", encoding.to_string())))
        .collect()
}

impl Hermes {
    /// Create a new hermes client with the given base URL.
    pub fn try_new(base: impl IntoUrl) -> crate::Result<Self> {
        Ok(Self {
            base: base.into_url()?,
            client: Client::new(),
        })
    }

    /// Get a stream of price updates.
    pub async fn price_updates(
        &self,
        feed_ids: impl IntoIterator<Item = &Identifier>,
        encoding: Option<EncodingType>,
    ) -> crate::Result<impl Stream<Item = crate::Result<PriceUpdate>> + 'static> {
        let params = get_query(feed_ids, encoding);
        let stream = self
            .client
            .get(self.base.join(PRICE_STREAM)?)
            .query(&params)
            .send()
            .await?
            .bytes_stream()
            .eventsource()
            .map_err(crate::Error::from)
            .try_filter_map(|event| {
                let update = deserialize_price_update_event(&event)
                    .inspect_err(
                        |err| tracing::warn!(%err, ?event, "deserialize price update error"),
                    )
                    .ok();
                async { Ok(update) }
            });
        Ok(stream)
    }

    /// Get latest price updates.
    pub async fn latest_price_updates(
        &self,
        feed_ids: impl IntoIterator<Item = &Identifier>,
        encoding: Option<EncodingType>,
    ) -> crate::Result<PriceUpdate> {
        let params = get_query(feed_ids, encoding);
        let update = self
            .client
            .get(self.base.join(PRICE_LATEST)?)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;
        Ok(update)
    }

    /// Get latest TWAP updates for an averaging window of `window_seconds`.
    ///
    /// The response carries two accumulator updates bracketing the window,
    /// in start, end order.
    pub async fn latest_twap_updates(
        &self,
        feed_ids: impl IntoIterator<Item = &Identifier>,
        window_seconds: u64,
        encoding: Option<EncodingType>,
    ) -> crate::Result<PriceUpdate> {
        let params = get_query(feed_ids, encoding);
        let update = self
            .client
            .get(
                self.base
                    .join(&format!("/v2/updates/twap/{window_seconds}/latest"))?,
            )
            .query(&params)
            .send()
            .await?
            .json()
            .await?;
        Ok(update)
    }
}

impl Default for Hermes {
    fn default() -> Self {
        Self {
            base: DEFAULT_HERMES_BASE.parse().expect("must be valid"),
            client: Default::default(),
        }
    }
}

fn deserialize_price_update_event(event: &eventsource_stream::Event) -> crate::Result<PriceUpdate> {
    Ok(serde_json::from_str(&event.data)?)
}

/// Price Update.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct PriceUpdate {
    binary: BinaryPriceUpdate,
    #[serde(default)]
    parsed: Vec<serde_json::Value>,
}

impl PriceUpdate {
    /// Get the binary update.
    pub fn binary(&self) -> &BinaryPriceUpdate {
        &self.binary
    }

    /// Parse the binary payloads into accumulator updates.
    pub fn parse(&self) -> crate::Result<Vec<AccumulatorUpdateData>> {
        self.binary.parse()
    }
}

/// Binary Price Update.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct BinaryPriceUpdate {
    encoding: EncodingType,
    data: Vec<String>,
}

impl BinaryPriceUpdate {
    /// Parse the payloads into accumulator updates.
    pub fn parse(&self) -> crate::Result<Vec<AccumulatorUpdateData>> {
        self.data
            .iter()
            .map(|data| match self.encoding {
                EncodingType::Base64 => accumulator::parse_accumulator_update_base64(data),
                EncodingType::Hex => {
                    let data = hex::decode(data).map_err(crate::Error::decode)?;
                    accumulator::parse_accumulator_update(&data)
                }
            })
            .collect()
    }
}

/// Encoding Type.
#[derive(Clone, Copy, Debug, Default, serde::Deserialize, serde::Serialize)]
pub enum EncodingType {
    /// Hex.
    #[default]
    #[serde(rename = "hex")]
    Hex,
    /// Base64.
    #[serde(rename = "base64")]
    Base64,
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}
