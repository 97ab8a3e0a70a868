//! Wire shapes for the dashboard's row-oriented JSON responses.
//!
//! Every endpoint answers with the same envelope: a `LastUpdated` timestamp
//! and an ordered `Rows` sequence. The row shape differs per area, so the
//! envelope is generic over its row type.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::config;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A decoded dashboard response: `{LastUpdated, Rows: [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<R> {
    #[serde(rename = "LastUpdated")]
    pub last_updated: String,
    #[serde(rename = "Rows")]
    pub rows: Vec<R>,
}

impl<R> Envelope<R> {
    /// Parse the envelope's `LastUpdated` timestamp.
    pub fn last_updated_datetime(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.last_updated)
    }
}

// ---------------------------------------------------------------------------
// DataRow — rows on the data and stats endpoints
// ---------------------------------------------------------------------------

/// A reading on the `data` and `stats` endpoints.
///
/// `Value` is nullable upstream (the interconnection series pads future
/// slots with nulls), and `FieldName` is absent on some areas.
#[derive(Debug, Clone, Deserialize)]
pub struct DataRow {
    #[serde(rename = "EffectiveTime")]
    pub effective_time: String,
    #[serde(rename = "FieldName", default)]
    pub field_name: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
}

impl DataRow {
    /// Parse this row's `EffectiveTime` timestamp.
    pub fn effective_datetime(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.effective_time)
    }
}

// ---------------------------------------------------------------------------
// MarketRow — rows on the marketdata endpoint
// ---------------------------------------------------------------------------

/// A market price reading on the `marketdata` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketRow {
    #[serde(rename = "EffectiveTime")]
    pub effective_time: String,
    #[serde(rename = "EurPrice")]
    pub eur_price: f64,
}

impl MarketRow {
    /// Parse this row's `EffectiveTime` timestamp.
    pub fn effective_datetime(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.effective_time)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a dashboard timestamp (`01-Jan-2017 00:00:00`) into a UTC datetime.
///
/// The provider format carries no zone; readings are normalized to UTC
/// uniformly across all areas.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, config::TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc())
}
