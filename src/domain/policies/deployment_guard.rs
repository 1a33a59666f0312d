//! Deployment Guard
//!
//! Decides whether a gated operation (a database seeder, typically) is
//! permitted to run in the current deployment context. This is a pure
//! policy - it operates on resolved value objects and never touches
//! the process environment.
//!
//! The decision is a branch gate followed by an environment gate. The
//! environment gate is a three-way split (unrestricted / review app /
//! production-or-local) whose sub-checks are kept as written rather
//! than algebraically merged; the categories were designed around this
//! exact structure.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DeploymentContext, GuardedEnvironment};
use crate::error::SeedgateResult;

/// A gated operation: an optional branch restriction plus the
/// deployment contexts it may run in
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuardedOperation {
    /// Exact branch the operation is tied to, if any
    pub branch_restriction: Option<String>,
    /// Deployment contexts the operation may run in
    pub guarded_environment: GuardedEnvironment,
}

impl GuardedOperation {
    /// Operation restricted to the given deployment contexts, with no
    /// branch restriction
    pub fn new(guarded_environment: GuardedEnvironment) -> Self {
        Self {
            branch_restriction: None,
            guarded_environment,
        }
    }

    /// Unrestricted operation (any context, any branch)
    pub fn unrestricted() -> Self {
        Self::new(GuardedEnvironment::Any)
    }

    /// Restrict the operation to one exact branch
    pub fn with_branch_restriction(mut self, branch: impl Into<String>) -> Self {
        self.branch_restriction = Some(branch.into());
        self
    }

    /// Build an operation from configuration strings
    ///
    /// The category string must be one of the seven canonical values;
    /// anything else is a configuration error.
    pub fn from_config(category: &str, branch: Option<&str>) -> SeedgateResult<Self> {
        Ok(Self {
            branch_restriction: branch.map(str::to_string),
            guarded_environment: category.parse()?,
        })
    }
}

/// Guard predicate over a deployment context and a gated operation
pub struct DeploymentGuard;

impl DeploymentGuard {
    /// Evaluate whether the operation may run in the given context
    ///
    /// Pure function: no side effects, total over its input domain.
    /// A branch mismatch denies regardless of the environment rules.
    pub fn evaluate(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        Self::branch_ok(context, operation) && Self::can_run_in_env(context, operation)
    }

    /// An absent restriction matches anything; a present restriction
    /// matches only the identical deployed branch. A restriction
    /// against an absent deployed branch never matches.
    fn branch_ok(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        match &operation.branch_restriction {
            None => true,
            Some(branch) => context.deployed_branch.as_deref() == Some(branch.as_str()),
        }
    }

    fn can_run_in_env(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        operation.guarded_environment.is_any()
            || Self::review_app_only(context, operation)
            || (Self::production_or_local(context, operation)
                && (Self::needs_production(context, operation)
                    || Self::local_compatible(context, operation)))
    }

    /// True only for a review app running a review-compatible category
    fn review_app_only(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        context.is_review_app()
            && matches!(
                operation.guarded_environment,
                GuardedEnvironment::ReviewOnly
                    | GuardedEnvironment::ReviewAndLocal
                    | GuardedEnvironment::ReviewAndProduction
            )
    }

    /// True only for an untyped deployment (not a review app, nor any
    /// other tagged deployment) in a production-or-local category
    fn production_or_local(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        context.is_untyped_deployment()
            && matches!(
                operation.guarded_environment,
                GuardedEnvironment::LocalDevOnly
                    | GuardedEnvironment::ProductionOnly
                    | GuardedEnvironment::ProductionAndLocal
                    | GuardedEnvironment::ReviewAndLocal
                    | GuardedEnvironment::ReviewAndProduction
            )
    }

    /// True only in production with a category not pinned to local
    fn needs_production(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        context.is_production()
            && !matches!(
                operation.guarded_environment,
                GuardedEnvironment::LocalDevOnly | GuardedEnvironment::ReviewAndLocal
            )
    }

    /// True only outside production with a category not pinned to it
    fn local_compatible(context: &DeploymentContext, operation: &GuardedOperation) -> bool {
        !context.is_production()
            && !matches!(
                operation.guarded_environment,
                GuardedEnvironment::ProductionOnly | GuardedEnvironment::ReviewAndProduction
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> DeploymentContext {
        DeploymentContext::new().with_application_environment("local")
    }

    fn production() -> DeploymentContext {
        DeploymentContext::new().with_application_environment("production")
    }

    fn review_app() -> DeploymentContext {
        production().with_deployment_type("review")
    }

    // === Unrestricted operations ===

    #[test]
    fn any_runs_everywhere() {
        let op = GuardedOperation::unrestricted();
        assert!(DeploymentGuard::evaluate(&local(), &op));
        assert!(DeploymentGuard::evaluate(&production(), &op));
        assert!(DeploymentGuard::evaluate(&review_app(), &op));
    }

    #[test]
    fn any_still_subject_to_branch_gate() {
        let op = GuardedOperation::unrestricted().with_branch_restriction("main");
        assert!(!DeploymentGuard::evaluate(&local(), &op));
        assert!(DeploymentGuard::evaluate(
            &local().with_deployed_branch("main"),
            &op
        ));
    }

    // === Branch gate ===

    #[test]
    fn branch_mismatch_dominates_environment_rules() {
        let op = GuardedOperation::new(GuardedEnvironment::ReviewAndProduction)
            .with_branch_restriction("wontmatch");
        assert!(!DeploymentGuard::evaluate(&review_app(), &op));
        assert!(!DeploymentGuard::evaluate(
            &review_app().with_deployed_branch("other"),
            &op
        ));
    }

    #[test]
    fn branch_restriction_never_matches_absent_branch() {
        let op = GuardedOperation::unrestricted().with_branch_restriction("main");
        assert!(!DeploymentGuard::evaluate(&DeploymentContext::new(), &op));
    }

    #[test]
    fn branch_comparison_is_case_sensitive() {
        let op = GuardedOperation::unrestricted().with_branch_restriction("Main");
        assert!(!DeploymentGuard::evaluate(
            &local().with_deployed_branch("main"),
            &op
        ));
    }

    #[test]
    fn exact_branch_match_passes() {
        let op = GuardedOperation::new(GuardedEnvironment::ReviewAndLocal)
            .with_branch_restriction("anything");
        let ctx = local().with_deployed_branch("anything");
        assert!(DeploymentGuard::evaluate(&ctx, &op));
    }

    // === Environment gate, local deployment ===

    #[test]
    fn local_deployment_category_matrix() {
        let cases = [
            (GuardedEnvironment::ReviewAndLocal, true),
            (GuardedEnvironment::LocalDevOnly, true),
            (GuardedEnvironment::ProductionAndLocal, true),
            (GuardedEnvironment::ReviewOnly, false),
            (GuardedEnvironment::ProductionOnly, false),
            (GuardedEnvironment::ReviewAndProduction, false),
        ];
        for (env, expected) in cases {
            let op = GuardedOperation::new(env);
            assert_eq!(
                DeploymentGuard::evaluate(&local(), &op),
                expected,
                "local deployment with {env}"
            );
        }
    }

    // === Environment gate, production deployment ===

    #[test]
    fn production_deployment_category_matrix() {
        let cases = [
            (GuardedEnvironment::ReviewAndLocal, false),
            (GuardedEnvironment::LocalDevOnly, false),
            (GuardedEnvironment::ProductionAndLocal, true),
            (GuardedEnvironment::ReviewOnly, false),
            (GuardedEnvironment::ProductionOnly, true),
            (GuardedEnvironment::ReviewAndProduction, true),
        ];
        for (env, expected) in cases {
            let op = GuardedOperation::new(env);
            assert_eq!(
                DeploymentGuard::evaluate(&production(), &op),
                expected,
                "production deployment with {env}"
            );
        }
    }

    // === Environment gate, review app ===

    #[test]
    fn review_app_category_matrix() {
        let cases = [
            (GuardedEnvironment::ReviewAndLocal, true),
            (GuardedEnvironment::LocalDevOnly, false),
            (GuardedEnvironment::ProductionAndLocal, false),
            (GuardedEnvironment::ReviewOnly, true),
            (GuardedEnvironment::ProductionOnly, false),
            (GuardedEnvironment::ReviewAndProduction, true),
        ];
        for (env, expected) in cases {
            let op = GuardedOperation::new(env);
            assert_eq!(
                DeploymentGuard::evaluate(&review_app(), &op),
                expected,
                "review app with {env}"
            );
        }
    }

    // === Unknown deployment-type tags ===

    #[test]
    fn unknown_deployment_type_denies_every_restricted_category() {
        // A non-review tag satisfies neither the review path nor the
        // untyped production-or-local path.
        let ctx = production().with_deployment_type("canary");
        for env in GuardedEnvironment::ALL {
            let op = GuardedOperation::new(env);
            assert_eq!(
                DeploymentGuard::evaluate(&ctx, &op),
                env.is_any(),
                "canary deployment with {env}"
            );
        }
    }

    // === Construction ===

    #[test]
    fn from_config_parses_category_and_branch() {
        let op = GuardedOperation::from_config("PRODUCTION+LOCAL", Some("main")).unwrap();
        assert_eq!(
            op.guarded_environment,
            GuardedEnvironment::ProductionAndLocal
        );
        assert_eq!(op.branch_restriction.as_deref(), Some("main"));
    }

    #[test]
    fn from_config_rejects_invalid_category() {
        assert!(GuardedOperation::from_config("EVERYWHERE", None).is_err());
    }

    #[test]
    fn default_operation_is_unrestricted() {
        assert_eq!(GuardedOperation::default(), GuardedOperation::unrestricted());
    }
}
