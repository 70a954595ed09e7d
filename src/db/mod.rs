//! Persistence module split across logical submodules.

mod books;
mod connection;

pub use connection::{default_db_path, BookStore};
