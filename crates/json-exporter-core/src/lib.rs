//! JSON exporter core: the JSON flattener and the shared error type.
//!
//! This crate turns an arbitrary JSON document into flat `(name, value)`
//! readings. It carries no transport or runtime dependencies so the naming
//! scheme can be reused and tested without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Upstream documents are untrusted input, so every fallible path surfaces
//! as `ExporterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod flatten;

/// Shared result type.
pub use error::{ErrorCode, ExporterError, Result};
pub use flatten::{collect, flatten, walk, Reading, Receiver};
