//! Guarded environment value object - the deployment contexts an
//! operation may run in
//!
//! Seven categories: unrestricted, each single context (review,
//! production, local), and each pairing. The wire strings (`*`,
//! `REVIEW`, `PRODUCTION+LOCAL`, ...) are what seeder configuration
//! declares; the closed enum keeps every other string out.

use serde::{Deserialize, Serialize};

use crate::error::SeedgateError;

/// Deployment contexts an operation is allowed to execute in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GuardedEnvironment {
    /// No restriction (default)
    #[default]
    #[serde(rename = "*")]
    Any,
    /// Only ephemeral review deployments
    #[serde(rename = "REVIEW")]
    ReviewOnly,
    /// Only production
    #[serde(rename = "PRODUCTION")]
    ProductionOnly,
    /// Only local development
    #[serde(rename = "LOCAL")]
    LocalDevOnly,
    /// Review or local
    #[serde(rename = "REVIEW+LOCAL")]
    ReviewAndLocal,
    /// Review or production
    #[serde(rename = "REVIEW+PRODUCTION")]
    ReviewAndProduction,
    /// Production or local
    #[serde(rename = "PRODUCTION+LOCAL")]
    ProductionAndLocal,
}

impl GuardedEnvironment {
    /// All seven categories
    pub const ALL: [GuardedEnvironment; 7] = [
        GuardedEnvironment::Any,
        GuardedEnvironment::ReviewOnly,
        GuardedEnvironment::ProductionOnly,
        GuardedEnvironment::LocalDevOnly,
        GuardedEnvironment::ReviewAndLocal,
        GuardedEnvironment::ReviewAndProduction,
        GuardedEnvironment::ProductionAndLocal,
    ];

    /// The canonical configuration string for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardedEnvironment::Any => "*",
            GuardedEnvironment::ReviewOnly => "REVIEW",
            GuardedEnvironment::ProductionOnly => "PRODUCTION",
            GuardedEnvironment::LocalDevOnly => "LOCAL",
            GuardedEnvironment::ReviewAndLocal => "REVIEW+LOCAL",
            GuardedEnvironment::ReviewAndProduction => "REVIEW+PRODUCTION",
            GuardedEnvironment::ProductionAndLocal => "PRODUCTION+LOCAL",
        }
    }

    /// Returns true if this is the unrestricted category
    pub fn is_any(&self) -> bool {
        matches!(self, GuardedEnvironment::Any)
    }
}

impl std::fmt::Display for GuardedEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GuardedEnvironment {
    type Err = SeedgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| SeedgateError::InvalidGuardedEnvironment {
                value: s.to_string(),
            })
    }
}
