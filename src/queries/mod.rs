//! Query modules for the dashboard client.
//!
//! Each module provides a query struct that borrows a
//! [`Connection`](crate::connection::Connection) and exposes a `latest()`
//! fetch returning one of the output record types, plus a pure
//! `build_record()` transform over pre-fetched envelopes.

pub mod exchange;
pub mod price;
pub mod production;

pub use exchange::ExchangeQuery;
pub use price::PriceQuery;
pub use production::ProductionQuery;
