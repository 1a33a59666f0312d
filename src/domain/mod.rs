//! Domain Layer
//!
//! The core of Seedgate - pure decision logic without I/O
//! dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (GuardedEnvironment,
//!   DeploymentContext)
//! - `policies/` - Business rules (DeploymentGuard)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never reads the process environment
//! 2. **Pure Functions** - Guard evaluation is stateless and total
//! 3. **Ports & Adapters** - Environment lookups and event reporting
//!    go through trait-defined ports

pub mod policies;
pub mod ports;
pub mod value_objects;
