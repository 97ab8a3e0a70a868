use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// PriceRecord — latest market price
// ---------------------------------------------------------------------------

/// The last known market price of a country, in `currency` per MWh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub country_code: String,
    pub currency: String,
    pub price: f64,
    pub datetime: DateTime<Utc>,
    pub source: String,
}
