//! Fingerfist Core - Foundational types for the Fingerfist asset tooling
//!
//! This crate provides the types every tooling crate depends on:
//! - `ContentHash` - SHA-256 based content hashing
//! - Error types and Result alias

mod error;
mod hash;

pub use error::{FingerfistError, Result};
pub use hash::ContentHash;
