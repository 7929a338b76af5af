//! Scores mirror the boards' won flags.

use super::Invariant;
use crate::game::QuantumTicTacToe;
use crate::types::{BoardId, Symbol};

/// Invariant: each side's score equals the number of boards it has won.
pub struct ScoreConsistent;

fn boards_won_by(game: &QuantumTicTacToe, symbol: Symbol) -> usize {
    BoardId::ALL
        .iter()
        .filter(|&&board| game.boards()[board].won_by() == Some(symbol))
        .count()
}

impl Invariant<QuantumTicTacToe> for ScoreConsistent {
    fn holds(game: &QuantumTicTacToe) -> bool {
        game.score(Symbol::X) as usize == boards_won_by(game, Symbol::X)
            && game.score(Symbol::O) as usize == boards_won_by(game, Symbol::O)
    }

    fn description() -> &'static str {
        "board-win scores match the boards' won flags"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_match_has_zero_scores() {
        let game = QuantumTicTacToe::new();
        assert!(ScoreConsistent::holds(&game));
        assert_eq!(game.score(Symbol::X), 0);
        assert_eq!(game.score(Symbol::O), 0);
    }
}
