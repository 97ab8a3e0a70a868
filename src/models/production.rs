use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// ProductionRecord — latest generation mix in MW
// ---------------------------------------------------------------------------

/// The last known production mix of a country, broken down by fuel category.
///
/// `production` maps canonical fuel categories (`coal`, `gas`, `wind`,
/// `unknown`) to megawatts. `storage` maps storage categories to signed
/// megawatts (positive = charging); the dashboard publishes no storage
/// series, so it is always empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub country_code: String,
    pub datetime: DateTime<Utc>,
    pub production: HashMap<String, f64>,
    pub storage: HashMap<String, f64>,
    pub source: String,
}
