//! Value Objects - immutable value types
//!
//! - `GuardedEnvironment` - which deployment contexts an operation
//!   may run in
//! - `DeploymentContext` - the resolved environment signals a guard
//!   decision is made against

mod deployment_context;
mod guarded_environment;

pub use deployment_context::{
    DeploymentContext, APP_ENV_VAR, DEPLOYMENT_TYPE_VAR, GIT_BRANCH_VAR, HEROKU_GIT_BRANCH_VAR,
};
pub use guarded_environment::GuardedEnvironment;
