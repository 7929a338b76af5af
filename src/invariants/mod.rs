//! Logical properties the match controller must preserve.
//!
//! Invariants are checked after every committed move in debug builds and are
//! testable independently; they double as documentation of the engine's
//! guarantees.

mod alternating_turn;
mod history_consistent;
mod score_consistent;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use score_consistent::ScoreConsistent;

use crate::game::QuantumTicTacToe;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Whether the invariant holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Record of a violated invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

fn check<I: Invariant<QuantumTicTacToe>>(
    game: &QuantumTicTacToe,
    violations: &mut Vec<InvariantViolation>,
) {
    if !I::holds(game) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

/// Checks every match invariant, collecting violations.
///
/// # Errors
///
/// Returns the list of violated invariants if any fail.
pub fn check_all(game: &QuantumTicTacToe) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    check::<AlternatingTurn>(game, &mut violations);
    check::<HistoryConsistent>(game, &mut violations);
    check::<ScoreConsistent>(game, &mut violations);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Move, MoveTarget};
    use crate::position::Position;
    use crate::types::{BoardId, Symbol};

    fn started() -> QuantumTicTacToe {
        let mut game = QuantumTicTacToe::new();
        game.join("p1").unwrap();
        game.join("p2").unwrap();
        game
    }

    #[test]
    fn test_fresh_match_satisfies_all_invariants() {
        assert!(check_all(&QuantumTicTacToe::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = started();
        game.apply_move(Move::new(
            "p1",
            Symbol::X,
            MoveTarget::Classical {
                board: BoardId::A,
                position: Position::Center,
            },
        ))
        .unwrap();
        game.apply_move(Move::new(
            "p2",
            Symbol::O,
            MoveTarget::Classical {
                board: BoardId::B,
                position: Position::TopLeft,
            },
        ))
        .unwrap();
        assert!(check_all(&game).is_ok());
    }
}
