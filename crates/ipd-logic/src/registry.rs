//! Explicit registration of strategies and engines
//!
//! Concrete implementations are registered as name-plus-factory entries.
//! Enumeration order is registration order and stays stable for the life of
//! the registry, which makes pairing order and displayed numbering stable
//! within a process run.

use crate::engine::Engine;
use crate::simple_engine::SimpleEngine;
use crate::strategies::{
    AlwaysCooperate, AlwaysDefect, Gradual, GrimTrigger, Pavlov, Random, SuspiciousTitForTat,
    TitForTat, TitForTwoTats,
};
use crate::strategy::Strategy;

/// A registered strategy: display name plus a factory for fresh instances.
#[derive(Clone, Copy, Debug)]
pub struct StrategyEntry {
    name: &'static str,
    construct: fn() -> Box<dyn Strategy>,
}

impl StrategyEntry {
    pub const fn new(name: &'static str, construct: fn() -> Box<dyn Strategy>) -> Self {
        Self { name, construct }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a fresh instance. Every call returns independent state.
    pub fn instantiate(&self) -> Box<dyn Strategy> {
        (self.construct)()
    }
}

/// A registered engine: display name plus a factory for fresh instances.
#[derive(Clone, Copy, Debug)]
pub struct EngineEntry {
    name: &'static str,
    construct: fn() -> Box<dyn Engine>,
}

impl EngineEntry {
    pub const fn new(name: &'static str, construct: fn() -> Box<dyn Engine>) -> Self {
        Self { name, construct }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn instantiate(&self) -> Box<dyn Engine> {
        (self.construct)()
    }
}

/// Registry of the available strategy and engine implementations.
///
/// Append-only: entries are never removed or reordered once registered.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    strategies: Vec<StrategyEntry>,
    engines: Vec<EngineEntry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every builtin strategy and engine registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_strategy(StrategyEntry::new("TitForTat", || Box::new(TitForTat)));
        registry.register_strategy(StrategyEntry::new("AlwaysDefect", || Box::new(AlwaysDefect)));
        registry.register_strategy(StrategyEntry::new("AlwaysCooperate", || {
            Box::new(AlwaysCooperate)
        }));
        registry.register_strategy(StrategyEntry::new("GrimTrigger", || {
            Box::new(GrimTrigger::default())
        }));
        registry.register_strategy(StrategyEntry::new("Pavlov", || Box::new(Pavlov)));
        registry.register_strategy(StrategyEntry::new("SuspiciousTitForTat", || {
            Box::new(SuspiciousTitForTat)
        }));
        registry.register_strategy(StrategyEntry::new("Random", || Box::new(Random::new())));
        registry.register_strategy(StrategyEntry::new("TitForTwoTats", || {
            Box::new(TitForTwoTats::default())
        }));
        registry.register_strategy(StrategyEntry::new("Gradual", || {
            Box::new(Gradual::default())
        }));
        registry.register_engine(EngineEntry::new("SimpleEngine", || {
            Box::new(SimpleEngine::new())
        }));
        registry
    }

    pub fn register_strategy(&mut self, entry: StrategyEntry) {
        self.strategies.push(entry);
    }

    pub fn register_engine(&mut self, entry: EngineEntry) {
        self.engines.push(entry);
    }

    pub fn strategies(&self) -> &[StrategyEntry] {
        &self.strategies
    }

    pub fn engines(&self) -> &[EngineEntry] {
        &self.engines
    }
}
