//! Configuration management.
//!
//! The binaries resolve these structs from CLI flags; the library never
//! reads the environment itself.

pub mod schema;

pub use schema::{ProxyConfig, WorkerConfig};
