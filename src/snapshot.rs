//! Serializable match snapshots.
//!
//! The hosting layer broadcasts these to connected clients; no wire format
//! is prescribed beyond structured serialization. Field names follow the
//! hosting application's camelCase convention.

use crate::action::MoveRecord;
use crate::board::{PerBoard, SubBoard};
use crate::game::QuantumTicTacToe;
use crate::hosting::PlayerId;
use crate::types::{MatchStatus, Symbol};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Client-facing view of one sub-board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Cells revealed to both players, row-major. Cells become public when
    /// they resolve to a classical mark.
    pub publicly_visible: [[bool; 3]; 3],
    /// Symbols of revealed cells, row-major; `None` for hidden cells.
    pub revealed: [[Option<Symbol>; 3]; 3],
    /// Symbol that won this board, if any.
    pub won_by: Option<Symbol>,
}

impl From<&SubBoard> for BoardView {
    fn from(board: &SubBoard) -> Self {
        Self {
            publicly_visible: board.visibility(),
            revealed: board.revealed(),
            won_by: board.won_by(),
        }
    }
}

/// Full serializable state of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    /// Lifecycle status.
    pub status: MatchStatus,
    /// Player seated as X, if any.
    pub x: Option<PlayerId>,
    /// Player seated as O, if any.
    pub o: Option<PlayerId>,
    /// Winner of the match once over; `None` while running or on a draw.
    pub winner: Option<PlayerId>,
    /// Boards won by X.
    pub x_score: u8,
    /// Boards won by O.
    pub o_score: u8,
    /// Chronological move list.
    pub moves: Vec<MoveRecord>,
    /// Public view of each board.
    pub boards: PerBoard<BoardView>,
}

impl From<&QuantumTicTacToe> for MatchSnapshot {
    fn from(game: &QuantumTicTacToe) -> Self {
        Self {
            status: game.status(),
            x: game.player(Symbol::X).map(str::to_owned),
            o: game.player(Symbol::O).map(str::to_owned),
            winner: game.winner().map(str::to_owned),
            x_score: game.score(Symbol::X),
            o_score: game.score(Symbol::O),
            moves: game.moves().to_vec(),
            boards: PerBoard::from_fn(|id| BoardView::from(&game.boards()[id])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot_shape() {
        let game = QuantumTicTacToe::new();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, MatchStatus::WaitingToStart);
        assert_eq!(snapshot.x, None);
        assert_eq!(snapshot.winner, None);
        assert!(snapshot.moves.is_empty());
        assert_eq!(snapshot.boards.a.publicly_visible, [[false; 3]; 3]);
    }

    #[test]
    fn test_wire_field_names() {
        let game = QuantumTicTacToe::new();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["status"], "WAITING_TO_START");
        assert_eq!(json["xScore"], 0);
        assert_eq!(json["oScore"], 0);
        assert!(json["boards"]["A"]["publiclyVisible"].is_array());
        assert!(json["boards"]["C"]["wonBy"].is_null());
    }
}
