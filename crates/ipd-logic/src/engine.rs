//! Engine contract and lifecycle

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ConfigSchema, ConfigValues};
use crate::registry::StrategyEntry;

/// Engine lifecycle state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Created,
    StrategiesSet,
    Configured,
    Completed,
}

/// Unrecoverable engine misuse
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine was driven out of lifecycle order.
    #[error("invalid engine state for this action: expected {expected:?}, found {found:?}")]
    InvalidState {
        expected: EngineState,
        found: EngineState,
    },
}

/// A tournament engine.
///
/// Lifecycle: `Created → StrategiesSet → Configured → Completed`. The caller
/// drives the transitions in order; driving them out of order is a caller
/// error and fails loudly rather than proceeding silently.
pub trait Engine {
    /// Human-readable summary of the engine, shown in the UI.
    fn description(&self) -> &'static str;

    /// Supply the candidate strategy pool as factories, not instances.
    ///
    /// Transitions `Created → StrategiesSet`. Must be called before
    /// [`Engine::configuration`]. Supplying a new pool later resets the
    /// engine to `StrategiesSet` and discards any committed configuration.
    fn set_strategies(&mut self, strategies: Vec<StrategyEntry>);

    /// The engine's configurable options, in display order.
    ///
    /// May depend on the strategy pool (an engine could offer per-strategy
    /// fields), so it is only meaningful after [`Engine::set_strategies`].
    /// Pure read, no state transition.
    fn configuration(&self) -> ConfigSchema;

    /// Validate and apply user-supplied values.
    ///
    /// On failure the returned error carries the message to show the user,
    /// the engine keeps its previous state, and the caller is expected to
    /// retry with corrected values. On success the engine becomes
    /// `Configured`.
    fn set_configuration(&mut self, values: &ConfigValues) -> Result<(), ConfigError>;

    /// Run the tournament and return the presentation-ready report.
    ///
    /// Executable only from `Configured`; transitions to `Completed`. The
    /// report has no machine-readable structure beyond its display
    /// semantics. A panic from a strategy's `play` aborts the run.
    fn run_simulation(&mut self) -> Result<String, EngineError>;
}
