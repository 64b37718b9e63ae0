//! scuba-plan: deferred dive calculations.
//!
//! Provides:
//! - Turn pressure for a thirds gas plan (`turn_pressure`, `ThirdsCommand`)
//! - A serializable list of pending calculations (`PendingCalculations`)
//!   that can be built up, saved as YAML, and run later in one pass
//!
//! # Example
//!
//! ```
//! use scuba_plan::ThirdsCommand;
//!
//! let mut cmd = ThirdsCommand::configure(500.0, 3000, 100.0, 2);
//! assert_eq!(cmd.turn_pressure(), None);
//! cmd.execute().unwrap();
//! assert_eq!(cmd.turn_pressure(), Some(2750));
//! ```

pub mod calculation;
pub mod error;
pub mod pending;
pub mod turn;

// Re-exports
pub use calculation::{Calculation, Outcome};
pub use error::{PlanError, PlanResult};
pub use pending::{PendingCalculations, PendingEntry};
pub use turn::{ThirdsCommand, ThirdsInputs, ThirdsMethod, turn_pressure};
