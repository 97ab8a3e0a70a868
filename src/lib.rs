//! Client for the EirGrid Smart Grid Dashboard.
//!
//! Fetches the latest Irish electricity production mix, market price and
//! cross-border interconnector flow from the public dashboard JSON API and
//! normalizes them into three fixed record shapes for downstream
//! aggregation.
//!
//! # Quick start
//!
//! ```no_run
//! use eirgrid_sdk::EirgridSdk;
//!
//! let sdk = EirgridSdk::builder().build();
//!
//! // Latest production mix for the Republic of Ireland, in MW
//! let production = sdk.production().latest("IE").unwrap();
//!
//! // Latest market price, EUR/MWh
//! let price = sdk.price().latest("IE").unwrap();
//!
//! // Net flow over the East-West Interconnector
//! let exchange = sdk.exchange().latest("GB", "IE").unwrap();
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;

pub use connection::{Connection, DateWindow, Endpoint};
pub use error::{EirgridError, Result};
pub use models::{ExchangeRecord, PriceRecord, ProductionRecord};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// EirgridSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`EirgridSdk`] instance.
///
/// Use [`EirgridSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](EirgridSdkBuilder::build) to create the SDK.
pub struct EirgridSdkBuilder {
    base_url: String,
    http_client: Option<reqwest::blocking::Client>,
    timeout: Duration,
}

impl Default for EirgridSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            http_client: None,
            timeout: config::REQUEST_TIMEOUT,
        }
    }
}

impl EirgridSdkBuilder {
    /// Override the dashboard base URL.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`]. Mainly useful for pointing
    /// the client at a local fixture server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Supply an existing HTTP client.
    ///
    /// Lets an application share one connection pool across fetches. When
    /// absent, `build()` constructs a fresh client.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the timeout for the timed dashboard requests.
    ///
    /// Applies to the generation, fuel-mix and interconnection fetches (the
    /// two market fetches carry no timeout). Defaults to
    /// [`config::REQUEST_TIMEOUT`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK.
    ///
    /// No request is issued eagerly; requests happen on the query methods.
    pub fn build(self) -> EirgridSdk {
        let client = self.http_client.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .expect("failed to build HTTP client")
        });
        EirgridSdk {
            conn: Connection::new(client, self.base_url, self.timeout),
        }
    }
}

// ---------------------------------------------------------------------------
// EirgridSdk
// ---------------------------------------------------------------------------

/// The main entry point for the dashboard client.
///
/// Wraps a [`Connection`] (the blocking HTTP transport) and exposes the
/// per-metric query interfaces as lightweight borrowing wrappers.
///
/// Created via [`EirgridSdk::builder()`].
pub struct EirgridSdk {
    conn: Connection,
}

impl EirgridSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> EirgridSdkBuilder {
        EirgridSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the production mix query interface.
    pub fn production(&self) -> queries::ProductionQuery<'_> {
        queries::ProductionQuery::new(&self.conn)
    }

    /// Access the market price query interface.
    pub fn price(&self) -> queries::PriceQuery<'_> {
        queries::PriceQuery::new(&self.conn)
    }

    /// Access the interconnector exchange query interface.
    pub fn exchange(&self) -> queries::ExchangeQuery<'_> {
        queries::ExchangeQuery::new(&self.conn)
    }

    // -- Utility methods ---------------------------------------------------

    /// Issue a request against an arbitrary dashboard area and return the
    /// raw JSON response.
    ///
    /// Escape-hatch access for areas not covered by the typed query
    /// interfaces (e.g. `windactual`, `demandactual`). Uses the configured
    /// request timeout.
    pub fn raw(
        &self,
        endpoint: Endpoint,
        area: &str,
        region: &str,
    ) -> Result<serde_json::Value> {
        self.conn.get_raw(
            endpoint,
            area,
            region,
            &DateWindow::today(),
            Some(self.conn.timeout()),
        )
    }

    /// Return a reference to the underlying [`Connection`] for advanced
    /// usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for EirgridSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EirgridSdk(base_url={})", self.conn.base_url())
    }
}
