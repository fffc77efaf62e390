//! Read-only reporting over weightlifting competition results.
//!
//! Two independent operations sit on top of the `results` table:
//!
//! - [`services::resolve`] turns a partial athlete name into a page of
//!   distinct (name, hometown) identities.
//! - [`services::aggregate`] loads the full history of one exact identity and
//!   computes its personal bests, make rates and best-row flags.
//!
//! Every call is a fresh read through the shared [`Database`] pool; nothing is
//! cached and nothing is written.

pub mod connection;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use connection::Database;
pub use error::{Result, StorageError};
