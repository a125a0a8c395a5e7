//! Request handlers.
//!
//! Handlers validate input, delegate to the repositories and resolver in
//! `khasra_db`, and map failures via [`AppError`](crate::error::AppError).

pub mod city;
pub mod khasra;
pub mod mouza;
pub mod schema;
