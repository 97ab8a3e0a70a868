use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// ExchangeRecord — latest cross-border power exchange in MW
// ---------------------------------------------------------------------------

/// The last known power exchange between two countries.
///
/// `sorted_country_codes` is the lexicographically sorted pair joined as
/// `A->B` (sorted so the pair indexes consistently downstream), and
/// `net_flow` is the signed flow in MW from the first code to the second.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRecord {
    pub sorted_country_codes: String,
    pub datetime: DateTime<Utc>,
    pub net_flow: f64,
    pub source: String,
}
