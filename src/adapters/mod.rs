//! Adapters - concrete implementations of domain ports

mod process_env;

pub use process_env::{current_context, ProcessEnv};
