//! Process environment adapter
//!
//! The one place Seedgate touches the real process environment.
//! Everything downstream works on an already-resolved
//! `DeploymentContext`.

use crate::domain::ports::EnvSource;
use crate::domain::value_objects::DeploymentContext;

/// Environment source backed by `std::env`
///
/// Blank values count as unset. Deploy tooling frequently exports
/// variables as empty strings instead of unsetting them, and the guard
/// rules treat the two identically.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

/// Resolve the deployment context from the process environment
pub fn current_context() -> DeploymentContext {
    DeploymentContext::resolve(&ProcessEnv)
}
