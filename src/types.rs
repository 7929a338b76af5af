//! Core domain types for quantum tic-tac-toe.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Game piece symbol. X always moves on even move indices, O on odd.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Symbol {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Symbol expected for the move at the given global index.
    pub fn for_move_index(index: u32) -> Self {
        if index % 2 == 0 { Symbol::X } else { Symbol::O }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// Label of one of the three linked sub-boards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum BoardId {
    /// Board A.
    A,
    /// Board B.
    B,
    /// Board C.
    C,
}

impl BoardId {
    /// All three boards, in label order.
    pub const ALL: [BoardId; 3] = [BoardId::A, BoardId::B, BoardId::C];
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardId::A => write!(f, "A"),
            BoardId::B => write!(f, "B"),
            BoardId::C => write!(f, "C"),
        }
    }
}

/// Lifecycle status of a match.
///
/// `WaitingToStart` becomes `InProgress` when the second player joins;
/// `Over` is entered exactly once and never left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Fewer than two players are seated.
    WaitingToStart,
    /// Both seats are filled and moves are being accepted.
    InProgress,
    /// The match has ended; no transition leaves this state.
    Over,
}
