//! Deployment context value object - the environment signals a guard
//! decision is made against
//!
//! Three optional strings resolved once by the caller (see the
//! `EnvSource` port): the application environment, the deployment
//! type, and the deployed branch. The context itself never touches
//! the process environment, so guard decisions stay pure.

use serde::{Deserialize, Serialize};

use crate::domain::ports::EnvSource;

/// Environment variable naming the application environment
pub const APP_ENV_VAR: &str = "APP_ENV";
/// Environment variable naming the deployment type
pub const DEPLOYMENT_TYPE_VAR: &str = "DEPLOYMENT_TYPE";
/// Environment variable naming the deployed branch
pub const GIT_BRANCH_VAR: &str = "GIT_BRANCH";
/// Fallback branch variable set by Heroku-style platforms
pub const HEROKU_GIT_BRANCH_VAR: &str = "HEROKU_GIT_BRANCH";

/// Deployment context supplied to guard evaluation
///
/// Absent values are meaningful, not errors: an absent
/// `deployment_type` means "not a typed deployment such as a review
/// app", and an absent `application_environment` counts as
/// non-production.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// Application environment; `"production"` is the special value
    pub application_environment: Option<String>,
    /// Deployment type tag; `"review"` denotes a review app
    pub deployment_type: Option<String>,
    /// Source-control branch of this deployment, if known
    pub deployed_branch: Option<String>,
}

impl DeploymentContext {
    /// Context with all three signals absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application environment
    pub fn with_application_environment(mut self, env: impl Into<String>) -> Self {
        self.application_environment = Some(env.into());
        self
    }

    /// Set the deployment type
    pub fn with_deployment_type(mut self, deployment_type: impl Into<String>) -> Self {
        self.deployment_type = Some(deployment_type.into());
        self
    }

    /// Set the deployed branch
    pub fn with_deployed_branch(mut self, branch: impl Into<String>) -> Self {
        self.deployed_branch = Some(branch.into());
        self
    }

    /// Resolve a context from an environment source
    ///
    /// Reads `APP_ENV`, `DEPLOYMENT_TYPE`, and `GIT_BRANCH` (falling
    /// back to `HEROKU_GIT_BRANCH` when `GIT_BRANCH` is unset).
    pub fn resolve(env: &impl EnvSource) -> Self {
        Self {
            application_environment: env.var(APP_ENV_VAR),
            deployment_type: env.var(DEPLOYMENT_TYPE_VAR),
            deployed_branch: env
                .var(GIT_BRANCH_VAR)
                .or_else(|| env.var(HEROKU_GIT_BRANCH_VAR)),
        }
    }

    /// Returns true if the application environment is production
    pub fn is_production(&self) -> bool {
        self.application_environment.as_deref() == Some("production")
    }

    /// Returns true if this deployment is a review app
    pub fn is_review_app(&self) -> bool {
        self.deployment_type.as_deref() == Some("review")
    }

    /// Returns true if the deployment carries no type tag at all
    ///
    /// Review apps (and any other tagged deployment) are excluded; only
    /// an untyped context counts as plain production-or-local.
    pub fn is_untyped_deployment(&self) -> bool {
        self.deployment_type.is_none()
    }
}
