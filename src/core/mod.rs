//! Core components of the `eod-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The async [`EodClient`] and its builder.
//! - The primary [`EodError`] type and the [`Outcome`] of a network call.
//! - Date sanitization, URL building and the transport seam shared by every endpoint.

/// The async client (`EodClient`), builder, and defaults.
pub mod client;
/// Environment-driven configuration.
pub mod config;
/// Date bounds and validated ranges.
pub mod dates;
/// The primary error type (`EodError`) for the crate.
pub mod error;
pub(crate) mod executor;
pub mod outcome;
/// Query parameters, URL building and redaction.
pub mod params;
/// Credential guard and transport fault suppression.
pub mod pipeline;
/// The `Session` / `AsyncSession` traits and their `reqwest` implementations.
pub mod session;

// convenient re-exports so most code can just `use crate::core::EodClient`
pub use client::{EodClient, EodClientBuilder};
pub use config::{Config, api_key_env_var};
pub use dates::{DateBound, DateRange, sanitize_dates};
pub use error::{EodError, Result};
pub use outcome::Outcome;
pub use params::{QueryParams, build_url, redacted_url};
pub use pipeline::require_api_key;
pub use session::{AsyncSession, BoxFuture, RawResponse, Session, TransportError};
