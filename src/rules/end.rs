//! End-of-match detection.
//!
//! The match ends exactly when no legal placement remains. A classical
//! placement needs an empty cell on an unwon board; an entangled placement
//! needs a position where two distinct unwon boards can each host another
//! spooky mark. Spooky marks stranded on dead cells never resolve and do not
//! keep the match alive.

use crate::board::{PerBoard, SubBoard};
use crate::position::Position;
use crate::types::BoardId;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Whether any legal placement remains on any board.
#[instrument(skip(boards))]
pub fn move_available(boards: &PerBoard<SubBoard>) -> bool {
    for position in Position::iter() {
        let mut open_cells = 0;
        for board in BoardId::ALL {
            let sub = &boards[board];
            if sub.won_by().is_some() {
                continue;
            }
            if sub.is_empty(position) {
                // A classical move fits here.
                return true;
            }
            if sub.can_entangle(position) {
                open_cells += 1;
            }
        }
        if open_cells >= 2 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ClassicalMark;
    use crate::types::Symbol;

    fn fill(board: &mut SubBoard, symbol: Symbol) {
        for (i, position) in Position::ALL.into_iter().enumerate() {
            board.resolve(
                position,
                ClassicalMark {
                    symbol,
                    index: i as u32,
                },
            );
        }
    }

    #[test]
    fn test_fresh_boards_have_moves() {
        let boards = PerBoard::<SubBoard>::default();
        assert!(move_available(&boards));
    }

    #[test]
    fn test_all_boards_won_ends_match() {
        let mut boards = PerBoard::<SubBoard>::default();
        for board in BoardId::ALL {
            boards[board].set_won(Symbol::X);
        }
        assert!(!move_available(&boards));
    }

    #[test]
    fn test_single_unwon_board_still_accepts_classical_moves() {
        let mut boards = PerBoard::<SubBoard>::default();
        boards[BoardId::A].set_won(Symbol::X);
        boards[BoardId::B].set_won(Symbol::O);
        assert!(move_available(&boards));
        fill(&mut boards[BoardId::C], Symbol::X);
        assert!(!move_available(&boards));
    }

    #[test]
    fn test_stranded_spooky_cell_is_dead() {
        // Two boards won; the survivor holds one spooky cell and is otherwise
        // full. No partner board remains, so no placement is legal.
        let mut boards = PerBoard::<SubBoard>::default();
        boards.place_pair(Position::TopLeft, BoardId::B, BoardId::C, Symbol::X, 0);
        boards[BoardId::A].set_won(Symbol::X);
        boards[BoardId::B].set_won(Symbol::O);
        for position in Position::ALL {
            if position != Position::TopLeft {
                boards[BoardId::C].resolve(
                    position,
                    ClassicalMark {
                        symbol: Symbol::O,
                        index: 1,
                    },
                );
            }
        }
        assert!(!move_available(&boards));
    }
}
