//! Production transform tests: fuel-mix arithmetic, the import marker and
//! unmapped-code failures.

mod common;

use chrono::{TimeZone, Utc};
use eirgrid_sdk::models::{DataRow, Envelope};
use eirgrid_sdk::queries::production::build_record;
use eirgrid_sdk::EirgridError;

// ---------------------------------------------------------------------------
// build_record
// ---------------------------------------------------------------------------

#[test]
fn splits_total_generation_by_fuel_mix_percentages() {
    let record = build_record("IE", &common::sample_generation(), &common::sample_fuel_mix())
        .unwrap();

    // 2000 MW total: 10% coal, 40% gas, 35% wind, 7% unknown
    assert_eq!(record.production["coal"], 200.0);
    assert_eq!(record.production["gas"], 800.0);
    assert_eq!(record.production["wind"], 700.0);
    assert_eq!(record.production["unknown"], 140.0);
}

#[test]
fn mapped_categories_sum_to_their_share_of_total() {
    let record = build_record("IE", &common::sample_generation(), &common::sample_fuel_mix())
        .unwrap();

    // 92% of the mix maps to production categories; the 8% import marker
    // does not, so the breakdown sums to 92% of 2000 MW.
    let sum: f64 = record.production.values().sum();
    assert!((sum - 1840.0).abs() < 1e-9);
}

#[test]
fn import_marker_is_excluded_from_production() {
    let record = build_record("IE", &common::sample_generation(), &common::sample_fuel_mix())
        .unwrap();

    assert!(!record.production.contains_key("GB->IE"));
    assert_eq!(record.production.len(), 4);
}

#[test]
fn only_rows_at_last_updated_contribute() {
    // The fixture carries a stale 99% coal row from the previous day.
    let record = build_record("IE", &common::sample_generation(), &common::sample_fuel_mix())
        .unwrap();

    assert_eq!(record.production["coal"], 200.0);
}

#[test]
fn unmapped_fuel_code_is_an_error() {
    let fuel_mix: Envelope<DataRow> = common::envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 00:00:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 00:00:00", "FieldName": "FUEL_FUSION", "Value": 100.0}
        ]
    }));

    let err = build_record("IE", &common::sample_generation(), &fuel_mix).unwrap_err();
    match err {
        EirgridError::UnmappedFuelCode(code) => assert_eq!(code, "FUEL_FUSION"),
        other => panic!("expected UnmappedFuelCode, got {other:?}"),
    }
}

#[test]
fn missing_latest_generation_row_is_an_error() {
    let generation: Envelope<DataRow> = common::envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 10:00:00", "FieldName": "GEN_EXP", "Value": 1800.0}
        ]
    }));

    let err = build_record("IE", &generation, &common::sample_fuel_mix()).unwrap_err();
    assert!(matches!(err, EirgridError::NotFound(_)));
}

#[test]
fn null_latest_generation_value_is_an_error() {
    let generation: Envelope<DataRow> = common::envelope(serde_json::json!({
        "LastUpdated": "15-Mar-2024 10:30:00",
        "Rows": [
            {"EffectiveTime": "15-Mar-2024 10:30:00", "FieldName": "GEN_EXP", "Value": null}
        ]
    }));

    let err = build_record("IE", &generation, &common::sample_fuel_mix()).unwrap_err();
    assert!(matches!(err, EirgridError::NotFound(_)));
}

#[test]
fn record_metadata_is_populated() {
    let record = build_record("IE", &common::sample_generation(), &common::sample_fuel_mix())
        .unwrap();

    assert_eq!(record.country_code, "IE");
    assert_eq!(record.source, "smartgriddashboard.eirgrid.com");
    assert_eq!(
        record.datetime,
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    );
    assert!(record.storage.is_empty());
}
