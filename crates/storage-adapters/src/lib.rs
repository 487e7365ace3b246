//! # Storage Adapters
//!
//! Concrete persistence for the generated data: a Postgres-backed
//! [`domains::CatalogStore`] and plain CSV files for the tabular outputs.

pub mod csv_files;
pub mod postgres;

pub use postgres::PgCatalogStore;
