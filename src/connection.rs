//! HTTP transport for the dashboard service.
//!
//! Wraps a blocking reqwest client and a base URL, and decodes the
//! row-oriented `{LastUpdated, Rows}` envelope every endpoint answers with.
//! Query structs borrow a [`Connection`] and never issue requests directly.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::Result;
use crate::models::Envelope;

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// The three paths under `DashboardService.svc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Generation, fuel-mix and interconnection series.
    Data,
    /// Aggregate statistics, including the latest-market-price indicator.
    Stats,
    /// Market price series.
    MarketData,
}

impl Endpoint {
    /// The URL path segment for this endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Data => "data",
            Endpoint::Stats => "stats",
            Endpoint::MarketData => "marketdata",
        }
    }
}

// ---------------------------------------------------------------------------
// DateWindow
// ---------------------------------------------------------------------------

/// A full-day query window, rendered as the dashboard's `datefrom`/`dateto`
/// parameters (`01-Jan-2017 00:00` through `01-Jan-2017 23:59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    date: NaiveDate,
}

impl DateWindow {
    /// Window covering the current local date.
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    /// Window covering an explicit date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The `datefrom` parameter value: start of day.
    pub fn date_from(&self) -> String {
        format!("{} 00:00", self.date.format(config::WINDOW_DATE_FORMAT))
    }

    /// The `dateto` parameter value: end of day.
    pub fn date_to(&self) -> String {
        format!("{} 23:59", self.date.format(config::WINDOW_DATE_FORMAT))
    }
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Blocking HTTP transport bound to a dashboard base URL.
pub struct Connection {
    client: reqwest::blocking::Client,
    base_url: String,
    timeout: Duration,
}

impl Connection {
    /// Create a connection from an existing client, base URL and request
    /// timeout.
    ///
    /// The client is caller-supplied so an application can share one
    /// connection pool across fetches; [`crate::EirgridSdkBuilder`] builds a
    /// fresh one when none is injected.
    pub fn new(
        client: reqwest::blocking::Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to the timed fetches.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Access the underlying HTTP client for advanced usage.
    pub fn client(&self) -> &reqwest::blocking::Client {
        &self.client
    }

    /// Issue a GET against an endpoint and decode the response envelope.
    ///
    /// `timeout` is per-request: the generation, fuel-mix and interconnection
    /// fetches pass the connection's configured timeout, while the two market
    /// fetches pass `None`, matching the provider-facing behavior this client
    /// preserves.
    pub fn get<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        area: &str,
        region: &str,
        window: &DateWindow,
        timeout: Option<Duration>,
    ) -> Result<Envelope<R>> {
        let response = self.request(endpoint, area, region, window, timeout)?;
        Ok(response.json()?)
    }

    /// Issue a GET and return the response body as untyped JSON.
    ///
    /// Escape hatch for areas not covered by the typed query interfaces.
    pub fn get_raw(
        &self,
        endpoint: Endpoint,
        area: &str,
        region: &str,
        window: &DateWindow,
        timeout: Option<Duration>,
    ) -> Result<serde_json::Value> {
        let response = self.request(endpoint, area, region, window, timeout)?;
        Ok(response.json()?)
    }

    fn request(
        &self,
        endpoint: Endpoint,
        area: &str,
        region: &str,
        window: &DateWindow,
        timeout: Option<Duration>,
    ) -> Result<reqwest::blocking::Response> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        let mut request = self.client.get(&url).query(&[
            ("datefrom", window.date_from().as_str()),
            ("dateto", window.date_to().as_str()),
            ("area", area),
            ("region", region),
        ]);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        Ok(request.send()?.error_for_status()?)
    }
}
