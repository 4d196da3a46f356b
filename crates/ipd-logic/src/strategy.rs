//! Strategy contract and move types

use serde::{Deserialize, Serialize};

use crate::round::RoundInfo;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// The opposite move.
    pub fn flipped(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

/// The moves of the previous round as `(my_last_move, opponent_last_move)`.
///
/// `None` before round 0 of a match; once history exists, both moves are
/// present — never a partially filled pair.
pub type LastMoves = Option<(Move, Move)>;

/// Swap perspective: `(mine, theirs)` becomes `(theirs, mine)`.
pub fn reversed(last_moves: LastMoves) -> LastMoves {
    last_moves.map(|(mine, theirs)| (theirs, mine))
}

/// A decision-making agent for the Iterated Prisoner's Dilemma.
///
/// One instance serves exactly one side of one match. Implementations may
/// keep arbitrary internal memory across rounds of that match; the instance
/// is discarded when the match ends and no state survives into the next
/// pairing, even for the same strategy type.
///
/// Nothing here guarantees purity or determinism — engines must not assume
/// either. Reproducible tournament results are only guaranteed when every
/// pooled strategy decides purely from `last_moves` and `info`.
pub trait Strategy {
    /// Decide the next move.
    ///
    /// Called once per round. `last_moves` is `None` on round 0 and the two
    /// most recent moves (self first) afterwards.
    fn play(&mut self, last_moves: LastMoves, info: &RoundInfo) -> Move;

    /// Human-readable summary of the strategy, shown in the UI.
    fn description(&self) -> &'static str;
}
