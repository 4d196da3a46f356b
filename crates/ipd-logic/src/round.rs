//! Per-round information passed from engines to strategies

use serde::{Deserialize, Serialize};

use crate::strategy::Move;

/// Payoff matrix for the Prisoner's Dilemma.
///
/// Total over all four move combinations by construction: the dense 2×2
/// table always holds an entry for every `(own, opponent)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    table: [[(u32, u32); 2]; 2],
}

impl PayoffMatrix {
    /// The standard payoffs: (C,C)→(3,3), (C,D)→(0,5), (D,C)→(5,0),
    /// (D,D)→(1,1).
    pub fn standard() -> Self {
        Self::new((3, 3), (0, 5), (5, 0), (1, 1))
    }

    /// Build a matrix from the four `(own_score, opponent_score)` entries,
    /// keyed by (own move, opponent move).
    pub fn new(cc: (u32, u32), cd: (u32, u32), dc: (u32, u32), dd: (u32, u32)) -> Self {
        let mut table = [[(0, 0); 2]; 2];
        table[slot(Move::Cooperate)][slot(Move::Cooperate)] = cc;
        table[slot(Move::Cooperate)][slot(Move::Defect)] = cd;
        table[slot(Move::Defect)][slot(Move::Cooperate)] = dc;
        table[slot(Move::Defect)][slot(Move::Defect)] = dd;
        Self { table }
    }

    /// Look up `(own_score, opponent_score)` for one round's moves.
    pub fn payoff(&self, own: Move, opponent: Move) -> (u32, u32) {
        self.table[slot(own)][slot(opponent)]
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

fn slot(m: Move) -> usize {
    match m {
        Move::Cooperate => 0,
        Move::Defect => 1,
    }
}

/// Information about the current round provided by the engine to a strategy.
///
/// Built fresh by the engine every round and never mutated afterwards.
/// Strategies can rely on every field being present in every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    /// Index of the current round within the match, starting at 0.
    pub round_number: u32,
    /// Payoffs for every move combination, keyed as (own, opponent).
    pub payoff_matrix: PayoffMatrix,
}
