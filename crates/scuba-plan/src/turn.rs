//! Turn pressure for a thirds gas plan.
//!
//! The diver turns the dive once the gas for one third of the plan is used.
//! `turn_pressure` is the plain function; `ThirdsCommand` wraps it for
//! callers that configure a calculation now and run it later.

use scuba_core::{DiveError, DiveResult, Real, ensure_finite, ensure_nonzero, truncate_to_i32};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Inputs to a turn-pressure calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThirdsInputs {
    /// Gas volume to reserve, in the same units the baseline scales.
    pub volume: Real,
    /// Starting tank pressure (e.g. PSI).
    pub pressure: i32,
    /// Fill percentage the volume is rated at (100 = full rated fill).
    pub baseline: Real,
    /// Number of tanks the volume is split across.
    pub tank_count: i32,
}

/// `truncate(pressure - volume / ((baseline / 100) * tank_count))`
pub fn turn_pressure(inputs: &ThirdsInputs) -> DiveResult<i32> {
    if inputs.tank_count == 0 {
        debug!(?inputs, "turn pressure with zero tanks");
        return Err(DiveError::DivisionByZero { what: "tank count" });
    }
    let baseline = ensure_nonzero(inputs.baseline, "baseline")
        .inspect_err(|_| debug!(?inputs, "turn pressure with zero baseline"))?;

    let divisor = (baseline / 100.0) * Real::from(inputs.tank_count);
    let used = ensure_finite(inputs.volume / divisor, "gas used per tank")?;
    truncate_to_i32(Real::from(inputs.pressure) - used, "turn pressure")
}

/// Strategy used by a `ThirdsCommand`.
///
/// Only the exact formula exists today; a rounded variant would slot in here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdsMethod {
    #[default]
    Precise,
}

impl ThirdsMethod {
    fn compute(self, inputs: &ThirdsInputs) -> DiveResult<i32> {
        match self {
            ThirdsMethod::Precise => turn_pressure(inputs),
        }
    }
}

/// A configured turn-pressure calculation that runs on demand.
///
/// Inputs are fixed at construction. `turn_pressure()` is `None` until
/// `execute` succeeds and stays fixed afterwards; executing again recomputes
/// the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThirdsCommand {
    inputs: ThirdsInputs,
    method: ThirdsMethod,
    turn_pressure: Option<i32>,
}

impl ThirdsCommand {
    pub fn configure(volume: Real, pressure: i32, baseline: Real, tank_count: i32) -> Self {
        Self::new(
            ThirdsInputs {
                volume,
                pressure,
                baseline,
                tank_count,
            },
            ThirdsMethod::Precise,
        )
    }

    pub fn new(inputs: ThirdsInputs, method: ThirdsMethod) -> Self {
        Self {
            inputs,
            method,
            turn_pressure: None,
        }
    }

    /// Run the calculation and store its result.
    ///
    /// On error the command stays unexecuted.
    pub fn execute(&mut self) -> DiveResult<i32> {
        let value = self.method.compute(&self.inputs)?;
        trace!(method = ?self.method, value, "thirds command executed");
        self.turn_pressure = Some(value);
        Ok(value)
    }

    pub fn turn_pressure(&self) -> Option<i32> {
        self.turn_pressure
    }

    pub fn is_executed(&self) -> bool {
        self.turn_pressure.is_some()
    }

    pub fn inputs(&self) -> &ThirdsInputs {
        &self.inputs
    }

    pub fn method(&self) -> ThirdsMethod {
        self.method
    }
}
