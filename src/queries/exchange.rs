//! Cross-border exchange: net flow over the East-West Interconnector.

use crate::config;
use crate::connection::{Connection, DateWindow, Endpoint};
use crate::error::{EirgridError, Result};
use crate::models::{DataRow, Envelope, ExchangeRecord};

// ---------------------------------------------------------------------------
// ExchangeQuery
// ---------------------------------------------------------------------------

/// Query interface for the last known power exchange between two countries,
/// backed by the `interconnection` area of the `data` endpoint.
pub struct ExchangeQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ExchangeQuery<'a> {
    /// Create a new `ExchangeQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetch the last known power exchange (in MW) between two countries.
    ///
    /// The dashboard region is resolved from `country_code2` only, an
    /// asymmetry kept from the upstream consumer of this feed.
    pub fn latest(&self, country_code1: &str, country_code2: &str) -> Result<ExchangeRecord> {
        let region = config::region_for(country_code2);
        let window = DateWindow::today();

        let interconnection: Envelope<DataRow> = self.conn.get(
            Endpoint::Data,
            "interconnection",
            region,
            &window,
            Some(self.conn.timeout()),
        )?;

        build_record(country_code1, country_code2, &interconnection)
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Assemble an [`ExchangeRecord`] from a pre-fetched interconnection
/// envelope.
///
/// The interconnection series pads unreported slots with nulls and zeros;
/// the latest reading is the non-zero row with the greatest `EffectiveTime`,
/// independent of response order. Fails when the day holds no such reading.
///
/// The raw flow is taken as country1 -> country2, positive meaning export
/// from country1. The dashboard's own caveat is that its sign runs the
/// other way (negative = export from Ireland to GB); that inversion is left
/// to interpretation downstream. Only the reordering to the sorted pair is
/// corrected here: the reported flow runs from the lexicographically first
/// code to the second, so the raw value is negated whenever `country_code1`
/// is not the first of the sorted pair.
pub fn build_record(
    country_code1: &str,
    country_code2: &str,
    interconnection: &Envelope<DataRow>,
) -> Result<ExchangeRecord> {
    let mut latest: Option<(&DataRow, chrono::DateTime<chrono::Utc>, f64)> = None;
    for row in &interconnection.rows {
        let value = match row.value {
            Some(v) if v != 0.0 => v,
            _ => continue,
        };
        let at = row.effective_datetime()?;
        if latest.as_ref().map_or(true, |(_, best, _)| at > *best) {
            latest = Some((row, at, value));
        }
    }
    let (_, datetime, raw_flow) = latest.ok_or_else(|| {
        EirgridError::NotFound("no non-zero interconnection reading".to_string())
    })?;

    // Sorted so the pair indexes consistently in the downstream database.
    let mut codes = [country_code1, country_code2];
    codes.sort();

    let net_flow = if country_code1 == codes[0] {
        raw_flow
    } else {
        -raw_flow
    };

    Ok(ExchangeRecord {
        sorted_country_codes: format!("{}->{}", codes[0], codes[1]),
        datetime,
        net_flow,
        source: config::SOURCE.to_string(),
    })
}
