//! Shared test fixtures for the dashboard client integration tests.
//!
//! Provides builders for sample response envelopes in the dashboard's
//! row-oriented wire shape, decoded through the same serde path the HTTP
//! transport uses.

use eirgrid_sdk::models::{DataRow, Envelope, MarketRow};

/// Decode an envelope from a `serde_json::Value` in the wire shape.
pub fn envelope<R: serde::de::DeserializeOwned>(value: serde_json::Value) -> Envelope<R> {
    serde_json::from_value(value).unwrap()
}

/// A `generationactual` envelope: total generation every 15 minutes, MW.
///
/// `LastUpdated` points at the 10:30 reading of 2000 MW; the earlier rows
/// exist so tests can verify only the latest reading is used.
pub fn sample_generation() -> Envelope<DataRow> {
    envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 10:00:00", "FieldName": "GEN_EXP", "Value": 1800.0},
            {"EffectiveTime": "15-Mar-2024 10:15:00", "FieldName": "GEN_EXP", "Value": 1900.0},
            {"EffectiveTime": "15-Mar-2024 10:30:00", "FieldName": "GEN_EXP", "Value": 2000.0}
        ]
    }))
}

/// A `fuelmix` envelope: percentage breakdown at the daily timestamp.
///
/// Percentages sum to 100, with 8% on the import marker (excluded from
/// production breakdowns).
pub fn sample_fuel_mix() -> Envelope<DataRow> {
    envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 00:00:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_COAL", "Value": 10.0},
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_GAS", "Value": 40.0},
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_RENEW", "Value": 35.0},
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_OTHER_FOSSIL", "Value": 7.0},
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_EWIC", "Value": 8.0},
            {"EffectiveTime": "14-Mar-2024 00:00:00", "FieldName": "FUEL_COAL", "Value": 99.0}
        ]
    }))
}

/// A `MarketPriceStats` envelope whose latest-price indicator points at
/// 15-Mar-2024 10:00:00.
pub fn sample_price_stats() -> Envelope<DataRow> {
    envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "AVG_MARKET_PRICE", "Value": 61.2},
            {"EffectiveTime": "15-Mar-2024 10:00:00", "FieldName": "LATEST_MARKET_PRICE", "Value": 64.5}
        ]
    }))
}

/// A `marketdata` envelope with half-hourly EUR prices covering the
/// timestamp named by [`sample_price_stats`].
pub fn sample_market_data() -> Envelope<MarketRow> {
    envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 09:00:00", "EurPrice": 58.1},
            {"EffectiveTime": "15-Mar-2024 09:30:00", "EurPrice": 60.0},
            {"EffectiveTime": "15-Mar-2024 10:00:00", "EurPrice": 64.5}
        ]
    }))
}

/// An `interconnection` envelope.
///
/// Includes null and zero padding rows, and places the greatest timestamp
/// in the middle of the sequence so order-independent selection is
/// observable. The latest non-zero reading is -120 MW at 10:30.
pub fn sample_interconnection() -> Envelope<DataRow> {
    envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 10:00:00", "FieldName": "INTER_EWIC", "Value": -80.0},
            {"EffectiveTime": "15-Mar-2024 10:30:00", "FieldName": "INTER_EWIC", "Value": -120.0},
            {"EffectiveTime": "15-Mar-2024 10:15:00", "FieldName": "INTER_EWIC", "Value": -100.0},
            {"EffectiveTime": "15-Mar-2024 10:45:00", "FieldName": "INTER_EWIC", "Value": 0.0},
            {"EffectiveTime": "15-Mar-2024 11:00:00", "FieldName": "INTER_EWIC", "Value": null}
        ]
    }))
}
