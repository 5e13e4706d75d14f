//! Git Tags REST API contract types and validation
//!
//! This crate defines the wire schema for annotated tag objects as served
//! by the remote Git hosting service. These types are shared between the
//! REST client, the mock connection, and the CLI.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
