//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods.
//! Methods used by the resolver accept any [`sqlx::PgExecutor`] so a single
//! acquired connection can serve a whole resolution; the rest take `&PgPool`.

pub mod city_property_repo;
pub mod khasra_number_repo;
pub mod land_classification_repo;
pub mod mouza_repo;
pub mod schema_repo;

pub use city_property_repo::CityPropertyRepo;
pub use khasra_number_repo::KhasraNumberRepo;
pub use land_classification_repo::LandClassificationRepo;
pub use mouza_repo::MouzaRepo;
pub use schema_repo::SchemaRepo;
