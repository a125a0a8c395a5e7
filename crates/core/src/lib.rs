//! Domain layer for the khasra valuation service.
//!
//! Holds the error taxonomy, shared id/timestamp aliases, parcel-number
//! parsing and the allow-listed city catalog. Nothing in here performs I/O.

pub mod catalog;
pub mod error;
pub mod khasra;
pub mod types;
