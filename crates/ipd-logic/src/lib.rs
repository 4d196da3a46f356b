//! Tournament logic for the Iterated Prisoner's Dilemma lab
//!
//! Strategy and engine authors implement the [`Strategy`] and [`Engine`]
//! traits; a [`Registry`] enumerates the concrete implementations so a front
//! end can assemble a tournament, drive the configuration round-trip and
//! display the final report.

mod config;
mod engine;
mod game;
mod pairing;
mod registry;
mod round;
mod simple_engine;
mod strategies;
mod strategy;

pub use config::{ConfigError, ConfigField, ConfigSchema, ConfigValue, ConfigValues, FieldKind};
pub use engine::{Engine, EngineError, EngineState};
pub use game::{run_match, MatchOutcome, RoundRecord};
pub use pairing::round_robin_pairs;
pub use registry::{EngineEntry, Registry, StrategyEntry};
pub use round::{PayoffMatrix, RoundInfo};
pub use simple_engine::{SimpleEngine, DEFAULT_ROUNDS};
pub use strategies::{
    AlwaysCooperate, AlwaysDefect, Gradual, GrimTrigger, Pavlov, Random, SuspiciousTitForTat,
    TitForTat, TitForTwoTats,
};
pub use strategy::{reversed, LastMoves, Move, Strategy};
