//! Market price: the latest known EUR/MWh price.

use crate::config;
use crate::connection::{Connection, DateWindow, Endpoint};
use crate::error::{EirgridError, Result};
use crate::models::{DataRow, Envelope, MarketRow, PriceRecord};

/// Stats field flagging the reference timestamp of the most recent price.
const LATEST_PRICE_FIELD: &str = "LATEST_MARKET_PRICE";

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for the last known market price, backed by the
/// `MarketPriceStats` area of the `stats` endpoint and the `marketdata`
/// endpoint.
pub struct PriceQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetch the last known power price of a country.
    ///
    /// The stats endpoint names the reference timestamp via its
    /// `LATEST_MARKET_PRICE` row; the price itself comes from the market
    /// data row at that exact timestamp. Currency is always EUR regardless
    /// of the requested country.
    pub fn latest(&self, country_code: &str) -> Result<PriceRecord> {
        let region = config::region_for(country_code);
        let window = DateWindow::today();

        // No request timeout on the two market fetches.
        let stats: Envelope<DataRow> =
            self.conn
                .get(Endpoint::Stats, "MarketPriceStats", region, &window, None)?;
        let market: Envelope<MarketRow> =
            self.conn
                .get(Endpoint::MarketData, "marketdata", region, &window, None)?;

        build_record(country_code, &stats, &market)
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Assemble a [`PriceRecord`] from pre-fetched stats and market envelopes.
///
/// Fails if the stats envelope carries no `LATEST_MARKET_PRICE` row, or if
/// no market row matches that row's `EffectiveTime` exactly.
pub fn build_record(
    country_code: &str,
    stats: &Envelope<DataRow>,
    market: &Envelope<MarketRow>,
) -> Result<PriceRecord> {
    let latest = stats
        .rows
        .iter()
        .find(|row| row.field_name.as_deref() == Some(LATEST_PRICE_FIELD))
        .ok_or_else(|| {
            EirgridError::NotFound(format!("no {} row in market price stats", LATEST_PRICE_FIELD))
        })?;

    let price = market
        .rows
        .iter()
        .find(|row| row.effective_time == latest.effective_time)
        .map(|row| row.eur_price)
        .ok_or_else(|| {
            EirgridError::NotFound(format!(
                "no market data row at {}",
                latest.effective_time
            ))
        })?;

    Ok(PriceRecord {
        country_code: country_code.to_string(),
        currency: "EUR".to_string(),
        price,
        datetime: latest.effective_datetime()?,
        source: config::SOURCE.to_string(),
    })
}
