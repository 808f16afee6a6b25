//! Common utilities module
//!
//! Shared error type used across the encoder, reader and render configuration.

pub mod error;

pub use error::{EncodeError, Result};
