//! Turn alternation: X on even move indices, O on odd.

use super::Invariant;
use crate::game::QuantumTicTacToe;
use crate::types::Symbol;

/// Invariant: recorded moves carry contiguous indices starting at 0 and
/// alternate X, O, X, O.
pub struct AlternatingTurn;

impl Invariant<QuantumTicTacToe> for AlternatingTurn {
    fn holds(game: &QuantumTicTacToe) -> bool {
        game.moves().iter().enumerate().all(|(i, record)| {
            record.index == i as u32 && record.symbol == Symbol::for_move_index(record.index)
        })
    }

    fn description() -> &'static str {
        "moves alternate X, O with contiguous indices"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Move, MoveTarget};
    use crate::position::Position;
    use crate::types::BoardId;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurn::holds(&QuantumTicTacToe::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = QuantumTicTacToe::new();
        game.join("p1").unwrap();
        game.join("p2").unwrap();
        for (symbol, player, position) in [
            (Symbol::X, "p1", Position::TopLeft),
            (Symbol::O, "p2", Position::Center),
            (Symbol::X, "p1", Position::BottomRight),
        ] {
            game.apply_move(Move::new(
                player,
                symbol,
                MoveTarget::Classical {
                    board: BoardId::A,
                    position,
                },
            ))
            .unwrap();
        }
        assert!(AlternatingTurn::holds(&game));
        assert_eq!(game.to_move(), Symbol::O);
    }
}
