//! Core types and trait definitions for the Lobby visitor registry.
//!
//! This crate is free of HTTP and runtime dependencies. The storage and API
//! crates depend on it; it depends on nothing proprietary.

pub mod directory;
pub mod error;
pub mod registry;
pub mod visitor;

pub use error::{Error, Result};
