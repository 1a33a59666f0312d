//! Policies - business rules
//!
//! - `DeploymentGuard` - the guard predicate deciding whether a gated
//!   operation runs in a given deployment context

mod deployment_guard;

pub use deployment_guard::{DeploymentGuard, GuardedOperation};
