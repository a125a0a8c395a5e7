//! Row models for the land-record tables.
//!
//! Every struct is a `FromRow` + `Serialize` mirror of one table. The
//! service only reads these tables, so there are no create/update DTOs.

pub mod khasra_number;
pub mod land_classification;
pub mod mouza;
