//! Seedgate - deployment-context guard for environment-gated seeders
//!
//! Seedgate decides whether a deployment-sensitive operation (a
//! database seeder, typically) may run in the current deployment
//! context - local development, an ephemeral review app, or
//! production - optionally pinned to one source-control branch.
//!
//! The decision itself is a pure function over resolved environment
//! signals; reading the process environment is an adapter concern so
//! guard logic stays deterministic and unit-testable.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod runner;

// Re-exports for convenience
pub use adapters::{current_context, ProcessEnv};
pub use domain::policies::{DeploymentGuard, GuardedOperation};
pub use domain::ports::{EnvSource, NoopEventSink, SeedEvent, SeedEventSink};
pub use domain::value_objects::{DeploymentContext, GuardedEnvironment};
pub use error::{SeedgateError, SeedgateResult};
pub use runner::{SeedReport, SeedRunner, Seeder};
