//! Core components of the `yfapi-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - Pure request assembly ([`request`]) and response mapping ([`records`]).

/// The main client (`YfClient`), builder, and configuration.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// JSON body to keyed record maps.
pub mod records;
/// URL, query and header assembly.
pub mod request;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
pub use records::{SecurityRecord, SparkRecord};
pub use request::{ApiRequest, Endpoint, QueryParams};
