//! Seed Event Port
//!
//! Provides an observable interface for seed runs. The core imposes no
//! logging of its own; callers attach whatever sink they need.

/// Event emitted while running a batch of gated seeders
#[derive(Debug, Clone)]
pub enum SeedEvent {
    /// Batch started
    Started { total: usize },

    /// A seeder passed its guard and ran to completion
    SeederRan { name: String },

    /// A seeder was skipped because its guard denied the context
    SeederSkipped { name: String },

    /// Batch completed
    Completed { ran: usize, skipped: usize },
}

/// Trait for receiving seed events
pub trait SeedEventSink {
    /// Handle a seed event
    fn on_event(&self, event: SeedEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SeedEventSink for NoopEventSink {
    fn on_event(&self, _event: SeedEvent) {
        // Do nothing
    }
}
