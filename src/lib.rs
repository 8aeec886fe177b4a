//! Rust client library for the BoxDice real-estate website API.
//!
//! Public API layers:
//! - [`BoxDiceClient`]/[`BlockingBoxDiceClient`]: authenticated JSON clients.
//!   The async client carries the full typed resource surface (contacts,
//!   listings, offices, consultants, reference data); the blocking client
//!   exposes the generic transport and pagination methods.
//! - [`types`]: wire-level payload shapes and the [`Page`]/[`Paging`]
//!   cursor contract.
//! - [`BoxDiceError`]: unified error type used by both clients.
//!
//! The API authenticates with `Authorization: Api-Key token=<key>` against
//! `https://<domain>/website_api/`. List endpoints page with an opaque
//! `after` cursor; pass `paging.next` back verbatim to fetch the next page.

mod blocking_client;
mod client;
mod error;
pub mod types;

/// Blocking JSON client for the website API.
pub use blocking_client::BlockingBoxDiceClient;
/// Async typed client for the website API.
pub use client::BoxDiceClient;
/// Error type returned by all client operations.
pub use error::BoxDiceError;
pub use types::{ApiConfig, CreatedRecord, Page, Paging};
