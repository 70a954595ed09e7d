//! Core library surface for the book record store.
//!
//! The store owns a local SQLite table of book records and exposes the
//! handful of synchronous operations a front end needs: create, list,
//! search by title substring, single-field update, delete, and CSV export.
//! The public modules here keep the API intentionally small so the `bin`
//! target as well as external tooling can reuse the same pieces.

pub mod db;
pub mod error;
pub mod export;
pub mod models;

/// The persistence handle and the default on-disk location helper, typically
/// used by `main.rs` to bring up the embedded SQLite store.
pub use db::{default_db_path, BookStore};

/// Error surface shared by every store operation.
pub use error::{Result, StoreError};

/// CSV serialization of a fetched record set.
pub use export::export_csv;

/// The domain types other layers manipulate.
pub use models::{BookRecord, Field};
