//! In-process backend for the Lobby visitor registry.
//!
//! All state lives in memory behind a single async lock and is lost when the
//! process exits.

mod store;

pub use store::MemoryRegistry;
