//! Production mix: total generation split by fuel category.

use std::collections::HashMap;

use crate::config;
use crate::connection::{Connection, DateWindow, Endpoint};
use crate::error::{EirgridError, Result};
use crate::models::{DataRow, Envelope, ProductionRecord};

// ---------------------------------------------------------------------------
// ProductionQuery
// ---------------------------------------------------------------------------

/// Query interface for the last known production mix, backed by the
/// `generationactual` and `fuelmix` areas of the `data` endpoint.
pub struct ProductionQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProductionQuery<'a> {
    /// Create a new `ProductionQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetch the last known production mix (in MW) of a country.
    ///
    /// Issues two GETs over the current day's window: total generation
    /// (every 15 minutes, MW) and the fuel-mix percentage breakdown (daily).
    /// Only `IE` is meaningfully supported; other codes fall back to the
    /// all-island region.
    pub fn latest(&self, country_code: &str) -> Result<ProductionRecord> {
        let region = config::region_for(country_code);
        let window = DateWindow::today();

        let generation: Envelope<DataRow> = self.conn.get(
            Endpoint::Data,
            "generationactual",
            region,
            &window,
            Some(self.conn.timeout()),
        )?;
        let fuel_mix: Envelope<DataRow> = self.conn.get(
            Endpoint::Data,
            "fuelmix",
            region,
            &window,
            Some(self.conn.timeout()),
        )?;

        build_record(country_code, &generation, &fuel_mix)
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Assemble a [`ProductionRecord`] from pre-fetched generation and fuel-mix
/// envelopes.
///
/// The total generation is the value of the generation row whose
/// `EffectiveTime` equals the envelope's `LastUpdated`; each fuel-mix row at
/// its own `LastUpdated` contributes `pct / 100 * total` MW under its
/// canonical category. The [`config::IMPORT_FUEL_CODE`] marker is excluded:
/// imports show up in the fuel mix but have no production category. Any
/// other fuel code missing from [`config::fuel_categories`] is an error,
/// never silently bucketed.
pub fn build_record(
    country_code: &str,
    generation: &Envelope<DataRow>,
    fuel_mix: &Envelope<DataRow>,
) -> Result<ProductionRecord> {
    let total = generation
        .rows
        .iter()
        .find(|row| row.effective_time == generation.last_updated)
        .and_then(|row| row.value)
        .ok_or_else(|| {
            EirgridError::NotFound(format!(
                "no generation reading at {}",
                generation.last_updated
            ))
        })?;

    let categories = config::fuel_categories();
    let mut production: HashMap<String, f64> = HashMap::new();

    for row in &fuel_mix.rows {
        if row.effective_time != fuel_mix.last_updated {
            continue;
        }
        let code = row.field_name.as_deref().ok_or_else(|| {
            EirgridError::NotFound(format!("fuel-mix row at {} has no FieldName", row.effective_time))
        })?;
        if code == config::IMPORT_FUEL_CODE {
            continue;
        }
        let category = categories
            .get(code)
            .ok_or_else(|| EirgridError::UnmappedFuelCode(code.to_string()))?;
        let pct = row
            .value
            .ok_or_else(|| EirgridError::NotFound(format!("fuel-mix row {} has no value", code)))?;
        production.insert(category.to_string(), pct / 100.0 * total);
    }

    Ok(ProductionRecord {
        country_code: country_code.to_string(),
        datetime: generation.last_updated_datetime()?,
        production,
        // The dashboard publishes no storage series.
        storage: HashMap::new(),
        source: config::SOURCE.to_string(),
    })
}
