//! Builtin strategy roster

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::round::RoundInfo;
use crate::strategy::{LastMoves, Move, Strategy};

/// Never defects.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn play(&mut self, _last_moves: LastMoves, _info: &RoundInfo) -> Move {
        Move::Cooperate
    }

    fn description(&self) -> &'static str {
        "Never defects. Always cooperates."
    }
}

/// Never cooperates.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn play(&mut self, _last_moves: LastMoves, _info: &RoundInfo) -> Move {
        Move::Defect
    }

    fn description(&self) -> &'static str {
        "Never cooperates. Always defects."
    }
}

/// Copy opponent's last move. Start with cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn play(&mut self, last_moves: LastMoves, _info: &RoundInfo) -> Move {
        match last_moves {
            None => Move::Cooperate,
            Some((_, theirs)) => theirs,
        }
    }

    fn description(&self) -> &'static str {
        "Copies opponent's last move. Starts by cooperating."
    }
}

/// Tit-for-Tat but start with defect.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuspiciousTitForTat;

impl Strategy for SuspiciousTitForTat {
    fn play(&mut self, last_moves: LastMoves, _info: &RoundInfo) -> Move {
        match last_moves {
            None => Move::Defect,
            Some((_, theirs)) => theirs,
        }
    }

    fn description(&self) -> &'static str {
        "Like Tit-for-Tat, but starts with defect."
    }
}

/// Cooperate until the opponent defects once, then always defect.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrimTrigger {
    triggered: bool,
}

impl Strategy for GrimTrigger {
    fn play(&mut self, last_moves: LastMoves, _info: &RoundInfo) -> Move {
        if let Some((_, Move::Defect)) = last_moves {
            self.triggered = true;
        }
        if self.triggered {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn description(&self) -> &'static str {
        "Cooperates until betrayed, then always defects."
    }
}

/// Win-stay, lose-switch.
///
/// A round counts as won when its own payoff reached at least the
/// mutual-cooperation reward of the current matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Strategy for Pavlov {
    fn play(&mut self, last_moves: LastMoves, info: &RoundInfo) -> Move {
        let Some((mine, theirs)) = last_moves else {
            return Move::Cooperate;
        };
        let (own_score, _) = info.payoff_matrix.payoff(mine, theirs);
        let (reward, _) = info.payoff_matrix.payoff(Move::Cooperate, Move::Cooperate);
        if own_score >= reward {
            mine
        } else {
            mine.flipped()
        }
    }

    fn description(&self) -> &'static str {
        "Repeats move if outcome was good, switches if bad."
    }
}

/// Defect only if the opponent defected twice in a row.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTwoTats {
    // opponent's move from two rounds back
    prior: Option<Move>,
}

impl Strategy for TitForTwoTats {
    fn play(&mut self, last_moves: LastMoves, _info: &RoundInfo) -> Move {
        let latest = last_moves.map(|(_, theirs)| theirs);
        let choice = match (self.prior, latest) {
            (Some(Move::Defect), Some(Move::Defect)) => Move::Defect,
            _ => Move::Cooperate,
        };
        self.prior = latest;
        choice
    }

    fn description(&self) -> &'static str {
        "Only retaliates after two consecutive defections."
    }
}

/// Escalating retaliation: after N opposing defections the strategy owes
/// N·(N+1)/2 defections of its own, then returns to cooperation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gradual {
    their_defections: u32,
    own_defections: u32,
}

impl Strategy for Gradual {
    fn play(&mut self, last_moves: LastMoves, _info: &RoundInfo) -> Move {
        if let Some((mine, theirs)) = last_moves {
            if mine == Move::Defect {
                self.own_defections += 1;
            }
            if theirs == Move::Defect {
                self.their_defections += 1;
            }
        }
        let owed = self.their_defections * (self.their_defections + 1) / 2;
        if self.own_defections < owed {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn description(&self) -> &'static str {
        "Retaliates with increasing severity, then forgives."
    }
}

/// Fair coin each round.
#[derive(Clone, Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Fixed-seed variant for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Random {
    fn play(&mut self, _last_moves: LastMoves, _info: &RoundInfo) -> Move {
        if self.rng.random_bool(0.5) {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn description(&self) -> &'static str {
        "Randomly cooperates or defects each round."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::PayoffMatrix;

    fn info(round_number: u32) -> RoundInfo {
        RoundInfo {
            round_number,
            payoff_matrix: PayoffMatrix::standard(),
        }
    }

    #[test]
    fn test_tit_for_tat_first_move() {
        let mut strategy = TitForTat;
        assert_eq!(strategy.play(None, &info(0)), Move::Cooperate);
    }

    #[test]
    fn test_tit_for_tat_copies() {
        let mut strategy = TitForTat;

        // Opponent cooperated
        let m = strategy.play(Some((Move::Cooperate, Move::Cooperate)), &info(1));
        assert_eq!(m, Move::Cooperate);

        // Opponent defected
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(2));
        assert_eq!(m, Move::Defect);
    }

    #[test]
    fn test_always_defect() {
        let mut strategy = AlwaysDefect;
        for round in 0..10 {
            assert_eq!(strategy.play(None, &info(round)), Move::Defect);
        }
    }

    #[test]
    fn test_always_cooperate() {
        let mut strategy = AlwaysCooperate;
        for round in 0..10 {
            assert_eq!(strategy.play(None, &info(round)), Move::Cooperate);
        }
    }

    #[test]
    fn test_grim_trigger_holds_grudge() {
        let mut strategy = GrimTrigger::default();

        // Cooperates while the opponent cooperates
        assert_eq!(strategy.play(None, &info(0)), Move::Cooperate);
        let m = strategy.play(Some((Move::Cooperate, Move::Cooperate)), &info(1));
        assert_eq!(m, Move::Cooperate);

        // One defection triggers it
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(2));
        assert_eq!(m, Move::Defect);

        // Forever, even if the opponent returns to cooperation
        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(3));
        assert_eq!(m, Move::Defect);
    }

    #[test]
    fn test_pavlov_win_stay() {
        let mut strategy = Pavlov;

        // Both cooperated (3 points) - stay with cooperate
        let m = strategy.play(Some((Move::Cooperate, Move::Cooperate)), &info(1));
        assert_eq!(m, Move::Cooperate);

        // We defected, they cooperated (5 points) - stay with defect
        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(1));
        assert_eq!(m, Move::Defect);
    }

    #[test]
    fn test_pavlov_lose_switch() {
        let mut strategy = Pavlov;

        // We cooperated, they defected (0 points) - switch to defect
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(1));
        assert_eq!(m, Move::Defect);

        // Both defected (1 point) - switch to cooperate
        let m = strategy.play(Some((Move::Defect, Move::Defect)), &info(1));
        assert_eq!(m, Move::Cooperate);
    }

    #[test]
    fn test_suspicious_tft_starts_defect() {
        let mut strategy = SuspiciousTitForTat;
        assert_eq!(strategy.play(None, &info(0)), Move::Defect);

        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(1));
        assert_eq!(m, Move::Cooperate);
    }

    #[test]
    fn test_tit_for_two_tats_forgives_single_defection() {
        let mut strategy = TitForTwoTats::default();

        assert_eq!(strategy.play(None, &info(0)), Move::Cooperate);
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(1));
        assert_eq!(m, Move::Cooperate);
        let m = strategy.play(Some((Move::Cooperate, Move::Cooperate)), &info(2));
        assert_eq!(m, Move::Cooperate);
    }

    #[test]
    fn test_tit_for_two_tats_retaliates_after_two() {
        let mut strategy = TitForTwoTats::default();

        assert_eq!(strategy.play(None, &info(0)), Move::Cooperate);
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(1));
        assert_eq!(m, Move::Cooperate);
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(2));
        assert_eq!(m, Move::Defect);
    }

    #[test]
    fn test_gradual_escalates() {
        let mut strategy = Gradual::default();

        assert_eq!(strategy.play(None, &info(0)), Move::Cooperate);

        // First opposing defection: owes one defection
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(1));
        assert_eq!(m, Move::Defect);

        // Debt paid, opponent clean since: back to cooperation
        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(2));
        assert_eq!(m, Move::Cooperate);

        // Second opposing defection: owes 1+2=3 total, one paid so far
        let m = strategy.play(Some((Move::Cooperate, Move::Defect)), &info(3));
        assert_eq!(m, Move::Defect);
        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(4));
        assert_eq!(m, Move::Defect);
        let m = strategy.play(Some((Move::Defect, Move::Cooperate)), &info(5));
        assert_eq!(m, Move::Cooperate);
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let mut first = Random::with_seed(42);
        let mut second = Random::with_seed(42);
        for round in 0..50 {
            assert_eq!(
                first.play(None, &info(round)),
                second.play(None, &info(round))
            );
        }
    }

    #[test]
    fn test_random_eventually_plays_both_moves() {
        let mut strategy = Random::with_seed(7);
        let moves: Vec<Move> = (0..100).map(|n| strategy.play(None, &info(n))).collect();
        assert!(moves.contains(&Move::Cooperate));
        assert!(moves.contains(&Move::Defect));
    }
}
