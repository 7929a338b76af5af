//! Every mark on every board traces back to a recorded move.

use super::Invariant;
use crate::board::Cell;
use crate::game::QuantumTicTacToe;
use crate::position::Position;
use crate::types::{BoardId, Symbol};

/// Invariant: each spooky or classical mark carries the index and symbol of
/// a recorded move, and no cell holds more than two spooky marks.
pub struct HistoryConsistent;

fn matches_record(game: &QuantumTicTacToe, index: u32, symbol: Symbol) -> bool {
    game.moves()
        .get(index as usize)
        .is_some_and(|record| record.symbol == symbol)
}

impl Invariant<QuantumTicTacToe> for HistoryConsistent {
    fn holds(game: &QuantumTicTacToe) -> bool {
        for board in BoardId::ALL {
            for position in Position::ALL {
                match game.boards()[board].cell(position) {
                    Cell::Empty => {}
                    Cell::Resolved(mark) => {
                        if !matches_record(game, mark.index, mark.symbol) {
                            return false;
                        }
                    }
                    Cell::Superposed(marks) => {
                        if marks.len() > 2 {
                            return false;
                        }
                        for mark in marks {
                            if !matches_record(game, mark.index, mark.symbol) {
                                return false;
                            }
                        }
                    }
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "every mark on every board belongs to a recorded move"
    }
}
