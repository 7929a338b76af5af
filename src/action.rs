//! First-class move types.
//!
//! Moves are domain events, not side effects: they carry the submitting
//! player's identity and intent, can be validated independently of
//! execution, and are recorded verbatim in match history.

use crate::hosting::PlayerId;
use crate::position::Position;
use crate::types::{BoardId, Symbol};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error for an entangled target that names the same board twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("an entangled move must name two distinct boards")]
pub struct SameBoard;

/// Wire shape of an entangled target; the public type enforces the
/// distinct-board invariant on construction and deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
struct RawTarget {
    primary: BoardId,
    secondary: BoardId,
    position: Position,
}

/// The two halves of an entangled placement: the same position claimed on two
/// distinct boards.
///
/// The primary board is the mover's preference: if this move closes an
/// entanglement cycle, the mover's mark resolves there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "RawTarget", into = "RawTarget")]
pub struct EntangledTarget {
    primary: BoardId,
    secondary: BoardId,
    position: Position,
}

impl EntangledTarget {
    /// Creates a target spanning `primary` and `secondary` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SameBoard`] if the two boards are equal.
    pub fn new(
        primary: BoardId,
        secondary: BoardId,
        position: Position,
    ) -> Result<Self, SameBoard> {
        if primary == secondary {
            return Err(SameBoard);
        }
        Ok(Self {
            primary,
            secondary,
            position,
        })
    }

    /// Board the mover's mark prefers on collapse.
    pub fn primary(&self) -> BoardId {
        self.primary
    }

    /// Board holding the other half of the pair.
    pub fn secondary(&self) -> BoardId {
        self.secondary
    }

    /// Shared position of both halves.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Both targeted boards, primary first.
    pub fn boards(&self) -> [BoardId; 2] {
        [self.primary, self.secondary]
    }
}

impl TryFrom<RawTarget> for EntangledTarget {
    type Error = SameBoard;

    fn try_from(raw: RawTarget) -> Result<Self, SameBoard> {
        Self::new(raw.primary, raw.secondary, raw.position)
    }
}

impl From<EntangledTarget> for RawTarget {
    fn from(target: EntangledTarget) -> Self {
        Self {
            primary: target.primary,
            secondary: target.secondary,
            position: target.position,
        }
    }
}

/// Where a move places its mark or marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveTarget {
    /// A single resolved mark on one board, no entanglement.
    Classical {
        /// Target board.
        board: BoardId,
        /// Target cell.
        position: Position,
    },
    /// A superposed pair at one position on two distinct boards.
    Entangled(EntangledTarget),
}

impl MoveTarget {
    /// Position targeted by this move.
    pub fn position(&self) -> Position {
        match self {
            MoveTarget::Classical { position, .. } => *position,
            MoveTarget::Entangled(target) => target.position(),
        }
    }

    /// Boards targeted by this move: one for classical, two for entangled.
    pub fn boards(&self) -> Vec<BoardId> {
        match self {
            MoveTarget::Classical { board, .. } => vec![*board],
            MoveTarget::Entangled(target) => target.boards().to_vec(),
        }
    }
}

/// A move submitted by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Identity of the submitting player.
    pub player: PlayerId,
    /// Symbol the player moves as.
    pub symbol: Symbol,
    /// Target of the move.
    pub target: MoveTarget,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: impl Into<PlayerId>, symbol: Symbol, target: MoveTarget) -> Self {
        Self {
            player: player.into(),
            symbol,
            target,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            MoveTarget::Classical { board, position } => {
                write!(f, "{} -> {} {}", self.symbol, board, position.label())
            }
            MoveTarget::Entangled(target) => write!(
                f,
                "{} -> {}/{} {}",
                self.symbol,
                target.primary(),
                target.secondary(),
                target.position().label()
            ),
        }
    }
}

/// A move recorded in match history, stamped with its global index.
///
/// Indices are strictly increasing and shared across all three boards; turn
/// alternation is computed from the total count, not per board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// Symbol that moved.
    pub symbol: Symbol,
    /// Target of the move.
    pub target: MoveTarget,
    /// Global move index, starting at 0.
    pub index: u32,
}
