//! Ports - interface definitions for infrastructure
//!
//! The domain depends only on these traits; adapters supply the
//! concrete implementations.

mod env_source;
mod seed_events;

pub use env_source::EnvSource;
pub use seed_events::{NoopEventSink, SeedEvent, SeedEventSink};
