//! Gated seed runner
//!
//! Runs a batch of seeders against one resolved deployment context,
//! consulting the guard before each one. Seeders whose guard denies
//! the context are skipped entirely - there is no partial execution.

use crate::domain::policies::{DeploymentGuard, GuardedOperation};
use crate::domain::ports::{NoopEventSink, SeedEvent, SeedEventSink};
use crate::domain::value_objects::DeploymentContext;
use crate::error::{SeedgateError, SeedgateResult};

/// A deployment-sensitive seeding task
pub trait Seeder {
    /// Name used in events and error messages
    fn name(&self) -> &str;

    /// Branch restriction and guarded-environment category
    fn operation(&self) -> &GuardedOperation;

    /// Execute the seeder. Only called when its guard permits.
    fn run(&self) -> anyhow::Result<()>;
}

/// Outcome of a seed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Seeders that passed their guard and ran
    pub ran: Vec<String>,
    /// Seeders skipped by their guard
    pub skipped: Vec<String>,
}

/// Runs seeders behind the deployment guard
pub struct SeedRunner<'a> {
    context: DeploymentContext,
    sink: &'a dyn SeedEventSink,
}

impl<'a> SeedRunner<'a> {
    /// Silent runner for the given context
    pub fn new(context: DeploymentContext) -> SeedRunner<'static> {
        SeedRunner {
            context,
            sink: &NoopEventSink,
        }
    }

    /// Runner reporting to the given event sink
    pub fn with_sink(context: DeploymentContext, sink: &'a dyn SeedEventSink) -> Self {
        Self { context, sink }
    }

    /// The context this runner evaluates guards against
    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    /// Run every permitted seeder in order, skipping the rest
    ///
    /// Stops at the first seeder failure; seeders already run are not
    /// rolled back (they are expected to be idempotent, as database
    /// seeders conventionally are).
    pub fn run_all(&self, seeders: &[Box<dyn Seeder>]) -> SeedgateResult<SeedReport> {
        self.sink.on_event(SeedEvent::Started {
            total: seeders.len(),
        });

        let mut report = SeedReport::default();
        for seeder in seeders {
            if !DeploymentGuard::evaluate(&self.context, seeder.operation()) {
                self.sink.on_event(SeedEvent::SeederSkipped {
                    name: seeder.name().to_string(),
                });
                report.skipped.push(seeder.name().to_string());
                continue;
            }

            seeder.run().map_err(|err| SeedgateError::SeederFailed {
                name: seeder.name().to_string(),
                message: err.to_string(),
            })?;

            self.sink.on_event(SeedEvent::SeederRan {
                name: seeder.name().to_string(),
            });
            report.ran.push(seeder.name().to_string());
        }

        self.sink.on_event(SeedEvent::Completed {
            ran: report.ran.len(),
            skipped: report.skipped.len(),
        });
        Ok(report)
    }
}
