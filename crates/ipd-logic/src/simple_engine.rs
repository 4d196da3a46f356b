//! Round-robin tournament engine

use crate::config::{ConfigError, ConfigField, ConfigSchema, ConfigValue, ConfigValues, FieldKind};
use crate::engine::{Engine, EngineError, EngineState};
use crate::game::run_match;
use crate::pairing::round_robin_pairs;
use crate::registry::StrategyEntry;
use crate::round::PayoffMatrix;

/// Default round count offered in the configuration schema.
pub const DEFAULT_ROUNDS: i64 = 10;

/// Minimum column widths keeping the report readable for short names.
const NAME_WIDTH_FLOOR: usize = 13;
const SCORE_WIDTH_FLOOR: usize = 5;

/// Plays one match per unordered strategy pair over a fixed number of
/// rounds, accumulates per-strategy scores and reports a ranked table.
#[derive(Debug, Default)]
pub struct SimpleEngine {
    state: EngineState,
    rounds: u32,
    roster: Vec<StrategyEntry>,
    pairs: Vec<(usize, usize)>,
}

impl SimpleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Pair enumeration order, fixed once the strategy pool is set.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

impl Engine for SimpleEngine {
    fn description(&self) -> &'static str {
        "A simple engine that plays a round-robin tournament between strategy pairs, \
         not including versus themselves."
    }

    fn set_strategies(&mut self, strategies: Vec<StrategyEntry>) {
        self.pairs = round_robin_pairs(strategies.len());
        self.roster = strategies;
        self.state = EngineState::StrategiesSet;
    }

    fn configuration(&self) -> ConfigSchema {
        vec![(
            "rounds".to_string(),
            ConfigField::new(
                FieldKind::Integer,
                ConfigValue::Integer(DEFAULT_ROUNDS),
                "Number of rounds",
            ),
        )]
    }

    fn set_configuration(&mut self, values: &ConfigValues) -> Result<(), ConfigError> {
        if self.state == EngineState::Created {
            return Err(ConfigError::Rejected {
                field: "rounds".to_string(),
                reason: "cannot be applied before the strategy pool is supplied".to_string(),
            });
        }

        let value = values
            .get("rounds")
            .ok_or_else(|| ConfigError::Missing("rounds".to_string()))?;
        let rounds = value.as_integer().ok_or_else(|| ConfigError::WrongKind {
            field: "rounds".to_string(),
            expected: FieldKind::Integer,
            found: value.kind(),
        })?;
        if rounds <= 0 {
            return Err(ConfigError::Rejected {
                field: "rounds".to_string(),
                reason: "was set to a non-positive value".to_string(),
            });
        }
        let rounds = u32::try_from(rounds).map_err(|_| ConfigError::Rejected {
            field: "rounds".to_string(),
            reason: "is too large".to_string(),
        })?;

        self.rounds = rounds;
        self.state = EngineState::Configured;
        Ok(())
    }

    fn run_simulation(&mut self) -> Result<String, EngineError> {
        if self.state != EngineState::Configured {
            return Err(EngineError::InvalidState {
                expected: EngineState::Configured,
                found: self.state,
            });
        }

        log::info!(
            "running {} matches over {} rounds each",
            self.pairs.len(),
            self.rounds
        );

        let matrix = PayoffMatrix::standard();
        let mut scores = vec![0u64; self.roster.len()];

        for &(i, j) in &self.pairs {
            // Two fresh, independent instances per match, even when both
            // sides share a type. Instances never outlive their match.
            let mut player_a = self.roster[i].instantiate();
            let mut player_b = self.roster[j].instantiate();
            let outcome = run_match(player_a.as_mut(), player_b.as_mut(), self.rounds, &matrix);

            scores[i] += u64::from(outcome.total_a);
            scores[j] += u64::from(outcome.total_b);
            log::debug!(
                "{} vs {}: {} - {}",
                self.roster[i].name(),
                self.roster[j].name(),
                outcome.total_a,
                outcome.total_b
            );
        }

        self.state = EngineState::Completed;
        log::info!("simulation complete");
        Ok(render_report(&self.roster, &scores))
    }
}

/// Render the score table: one row per strategy in supply order (not score
/// order), with a 1-based index. Column widths adapt to the longest name and
/// score, with floors so short names stay readable.
fn render_report(roster: &[StrategyEntry], scores: &[u64]) -> String {
    let name_width = roster
        .iter()
        .map(|entry| entry.name().len())
        .max()
        .unwrap_or(0)
        .max(NAME_WIDTH_FLOOR);
    let score_width = scores
        .iter()
        .map(|score| score.to_string().len())
        .max()
        .unwrap_or(0)
        .max(SCORE_WIDTH_FLOOR);

    let rule = "-".repeat(name_width + score_width + 15);
    let mut table = format!(
        "{rule}\n| {:^5} | {:^name_width$} | {:^score_width$} |\n{rule}",
        "Index", "Strategy Name", "Score"
    );
    for (index, (entry, score)) in roster.iter().zip(scores).enumerate() {
        table.push_str(&format!(
            "\n| {:^5} | {:^name_width$} | {:^score_width$} |",
            index + 1,
            entry.name(),
            score
        ));
    }

    format!("Simulation Done! Here are the results:\n\n{table}")
}
