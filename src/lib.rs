#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Satellite Service
//!
//! The validation and identity core of a `satellites` REST resource: list,
//! get-by-id, create and patch over an in-memory collection.
//!
//! ## Features
//!
//! 1. Validated writes
//!
//!     Every payload is a partial [satellite::ActiveModel]. Nothing reaches the
//!     store until it has been validated into a complete record.
//!
//! 2. Store-owned identity
//!
//!     Ids are assigned by the [SatelliteStore], never by the client, and stay
//!     within the JSON safe-integer range.
//!
//! 3. Testable
//!
//!     The service is generic over [SatelliteStore]; swap in a store that fails on
//!     purpose to exercise fault handling.
//!
//! 4. Typed outcomes
//!
//!     Failures are a [SatErr]: rejected, not found, or an internal fault. The
//!     [api] module maps them onto status codes.
//!
//! ## A quick taste
//!
//! ### Create
//! ```
//! use satellite_service::{MemoryStore, SatelliteService, Set, satellite};
//!
//! let mut service = SatelliteService::new(MemoryStore::new());
//! let sat = service.create(satellite::ActiveModel {
//!     name: Set("Explorer 1".to_owned()),
//!     lat: Set(28.5),
//!     lon: Set(-80.6),
//!     status: Set("launched".to_owned()),
//!     ..Default::default()
//! })?;
//! assert_eq!(sat.id, 1);
//! # Ok::<(), satellite_service::SatErr>(())
//! ```
//!
//! ### Patch
//! ```
//! # use satellite_service::{MemoryStore, SatelliteService, Set, StoreOptions, tests_cfg};
//! # let store = MemoryStore::connect(StoreOptions::new().seed(tests_cfg::satellite::seed()))?;
//! # let mut service = SatelliteService::new(store);
//! let mut sat = service.get_one(1)?.into_active_model();
//! sat.status = Set("safe mode".to_owned());
//!
//! let sat = service.patch(sat)?;
//! assert_eq!(sat.status, "safe mode");
//! # Ok::<(), satellite_service::SatErr>(())
//! ```
//!
//! ### Boundary
//! ```
//! # use satellite_service::{SatelliteService, api};
//! # use serde_json::json;
//! let mut service = SatelliteService::default();
//! let res = api::create(&mut service, json!({ "name": "Explorer 1" }));
//! assert_eq!(res.status.as_u16(), 400);
//! assert_eq!(res.body, Some(json!({ "message": "Invalid properties provided." })));
//! ```

pub mod api;
pub mod entity;
pub mod error;
mod service;
mod store;
#[doc(hidden)]
pub mod tests_cfg;

pub use entity::*;
pub use error::*;
pub use service::*;
pub use store::*;
