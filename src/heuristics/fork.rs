use crate::core::{Board, Player};

use super::{
    trial::{winning_columns, TrialMove},
    Heuristic,
};

const FORK_SCORE: i32 = 300;

/// Looks one drop ahead for forks: placements that leave two or more
/// distinct winning follow-ups, which the other side cannot both block
pub struct ForkHeuristic;

impl ForkHeuristic {
    fn count_forks(scratch: &mut Board, player: Player, win_length: usize) -> i32 {
        let columns = scratch
            .legal_columns()
            .into_iter()
            .map(|mv| mv.column)
            .collect::<Vec<_>>();

        let mut forks = 0;
        for column in columns {
            let Ok(mut trial) = TrialMove::place(&mut *scratch, player, column) else {
                continue;
            };
            if trial.wins(win_length) {
                continue;
            }
            if winning_columns(trial.board_mut(), player, win_length).len() >= 2 {
                forks += 1;
            }
        }
        forks
    }
}

impl Heuristic for ForkHeuristic {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32 {
        let mut scratch = board.clone();

        let own = Self::count_forks(&mut scratch, player, win_length);
        let theirs = Self::count_forks(&mut scratch, !player, win_length);

        debug_assert_eq!(&scratch, board);
        (own - theirs) * FORK_SCORE
    }
}
