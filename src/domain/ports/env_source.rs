//! Environment Source Port
//!
//! Abstracts over process-environment lookups so deployment contexts
//! can be resolved deterministically in tests without mutating global
//! state.

/// Source of environment variable values
pub trait EnvSource {
    /// Look up a variable, returning `None` when unset or blank
    fn var(&self, key: &str) -> Option<String>;
}
