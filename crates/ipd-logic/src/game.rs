//! Match execution

use serde::{Deserialize, Serialize};

use crate::round::{PayoffMatrix, RoundInfo};
use crate::strategy::{reversed, LastMoves, Move, Strategy};

/// Result of a single round
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u32,
    pub score_b: u32,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub rounds: Vec<RoundRecord>,
    pub total_a: u32,
    pub total_b: u32,
}

/// Run a complete match between two strategy instances.
///
/// Simultaneous-move semantics: both players decide from the same pre-round
/// history snapshot and neither observes the other's current-round move
/// before committing. Player B sees the history with the perspective
/// reversed.
///
/// A panic raised by either strategy propagates to the caller; a match is
/// never retried or partially scored.
pub fn run_match(
    player_a: &mut dyn Strategy,
    player_b: &mut dyn Strategy,
    rounds: u32,
    matrix: &PayoffMatrix,
) -> MatchOutcome {
    let mut records = Vec::with_capacity(rounds as usize);
    let mut last_moves: LastMoves = None;
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for round in 0..rounds {
        let info = RoundInfo {
            round_number: round,
            payoff_matrix: *matrix,
        };

        let move_a = player_a.play(last_moves, &info);
        let move_b = player_b.play(reversed(last_moves), &info);

        let (score_a, score_b) = matrix.payoff(move_a, move_b);
        total_a += score_a;
        total_b += score_b;
        log::trace!("round {round}: {move_a:?} vs {move_b:?} -> {score_a} - {score_b}");

        records.push(RoundRecord {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        last_moves = Some((move_a, move_b));
    }

    MatchOutcome {
        rounds: records,
        total_a,
        total_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{AlwaysCooperate, AlwaysDefect, TitForTat};
    use crate::strategy::Strategy;
    use proptest::prelude::*;

    /// Records everything the engine shows it, then cooperates.
    #[derive(Default)]
    struct Probe {
        seen_rounds: Vec<u32>,
        seen_history: Vec<LastMoves>,
    }

    impl Strategy for Probe {
        fn play(&mut self, last_moves: LastMoves, info: &RoundInfo) -> Move {
            self.seen_rounds.push(info.round_number);
            self.seen_history.push(last_moves);
            Move::Cooperate
        }

        fn description(&self) -> &'static str {
            "Records what the engine shows it."
        }
    }

    #[test]
    fn test_round_numbers_in_order() {
        let mut probe = Probe::default();
        let mut opponent = AlwaysDefect;
        run_match(&mut probe, &mut opponent, 7, &PayoffMatrix::standard());

        assert_eq!(probe.seen_rounds, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_history_starts_with_sentinel() {
        let mut probe = Probe::default();
        let mut opponent = AlwaysDefect;
        run_match(&mut probe, &mut opponent, 3, &PayoffMatrix::standard());

        assert_eq!(
            probe.seen_history,
            vec![
                None,
                Some((Move::Cooperate, Move::Defect)),
                Some((Move::Cooperate, Move::Defect)),
            ]
        );
    }

    #[test]
    fn test_second_player_sees_reversed_history() {
        let mut first = AlwaysDefect;
        let mut probe = Probe::default();
        run_match(&mut first, &mut probe, 2, &PayoffMatrix::standard());

        // From the probe's own perspective: (its move, the defector's move)
        assert_eq!(
            probe.seen_history,
            vec![None, Some((Move::Cooperate, Move::Defect))]
        );
    }

    #[test]
    fn test_cooperate_vs_cooperate() {
        let mut a = AlwaysCooperate;
        let mut b = AlwaysCooperate;
        let outcome = run_match(&mut a, &mut b, 10, &PayoffMatrix::standard());

        for record in &outcome.rounds {
            assert_eq!(record.move_a, Move::Cooperate);
            assert_eq!(record.move_b, Move::Cooperate);
            assert_eq!(record.score_a, 3);
            assert_eq!(record.score_b, 3);
        }
        assert_eq!(outcome.total_a, 30);
        assert_eq!(outcome.total_b, 30);
    }

    #[test]
    fn test_defect_vs_cooperate() {
        let mut a = AlwaysDefect;
        let mut b = AlwaysCooperate;
        let outcome = run_match(&mut a, &mut b, 10, &PayoffMatrix::standard());

        assert_eq!(outcome.total_a, 50);
        assert_eq!(outcome.total_b, 0);
    }

    #[test]
    fn test_tft_vs_always_defect() {
        let mut a = TitForTat;
        let mut b = AlwaysDefect;
        let outcome = run_match(&mut a, &mut b, 10, &PayoffMatrix::standard());

        // Round 0: TFT cooperates, AD defects
        assert_eq!(outcome.rounds[0].move_a, Move::Cooperate);
        assert_eq!(outcome.rounds[0].move_b, Move::Defect);

        // Round 1+: TFT retaliates, both defect
        for record in outcome.rounds.iter().skip(1) {
            assert_eq!(record.move_a, Move::Defect);
            assert_eq!(record.move_b, Move::Defect);
        }
    }

    #[test]
    fn test_cooperate_vs_tit_for_tat_three_rounds() {
        let mut a = AlwaysCooperate;
        let mut b = TitForTat;
        let outcome = run_match(&mut a, &mut b, 3, &PayoffMatrix::standard());

        assert_eq!(outcome.total_a, 9);
        assert_eq!(outcome.total_b, 9);
    }

    #[test]
    fn test_cumulative_scores() {
        let mut a = TitForTat;
        let mut b = AlwaysDefect;
        let outcome = run_match(&mut a, &mut b, 10, &PayoffMatrix::standard());

        let mut expected_a = 0u32;
        let mut expected_b = 0u32;
        for record in &outcome.rounds {
            expected_a += record.score_a;
            expected_b += record.score_b;
            assert_eq!(record.cumulative_a, expected_a);
            assert_eq!(record.cumulative_b, expected_b);
        }
        assert_eq!(outcome.total_a, expected_a);
        assert_eq!(outcome.total_b, expected_b);
    }

    proptest! {
        #[test]
        fn prop_exactly_n_rounds(rounds in 0u32..128) {
            let mut probe = Probe::default();
            let mut opponent = TitForTat;
            let outcome = run_match(&mut probe, &mut opponent, rounds, &PayoffMatrix::standard());

            prop_assert_eq!(outcome.rounds.len(), rounds as usize);
            prop_assert_eq!(probe.seen_rounds, (0..rounds).collect::<Vec<_>>());
        }

        #[test]
        fn prop_totals_match_round_sums(rounds in 0u32..128) {
            let mut a = TitForTat;
            let mut b = AlwaysDefect;
            let outcome = run_match(&mut a, &mut b, rounds, &PayoffMatrix::standard());

            let sum_a: u32 = outcome.rounds.iter().map(|r| r.score_a).sum();
            let sum_b: u32 = outcome.rounds.iter().map(|r| r.score_b).sum();
            prop_assert_eq!(outcome.total_a, sum_a);
            prop_assert_eq!(outcome.total_b, sum_b);
        }
    }
}
