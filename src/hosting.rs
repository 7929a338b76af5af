//! Hosting-layer seam: player identity, categorized errors, and the
//! polymorphic match contract.
//!
//! The hosting application (town, lobby, session manager) owns players and
//! transport; this module defines the narrow surface it drives.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque player identifier assigned by the hosting session layer.
pub type PlayerId = String;

/// Categorized reason a `join`, `leave`, or `apply_move` call was rejected.
///
/// Every failure in this crate is a synchronous, caller-correctable
/// precondition violation carrying one of these codes. The hosting layer maps
/// codes to user-facing messages; [`GameError::code`] yields the stable
/// machine-checkable string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    derive_more::Error,
    strum::IntoStaticStr,
)]
pub enum GameError {
    /// The player already occupies a slot in this match.
    #[display("Player is already in this game")]
    AlreadyJoined,
    /// Both player slots are taken.
    #[display("Game is full")]
    Full,
    /// The player occupies no slot in this match.
    #[display("Player is not in this game")]
    NotInGame,
    /// The targeted cell cannot take another mark.
    #[display("Board position is not empty")]
    PositionOccupied,
    /// Wrong symbol for the current move count, or the submitter does not own
    /// the slot for that symbol.
    #[display("Not your turn")]
    NotYourTurn,
    /// The match is not accepting moves.
    #[display("Game is not in progress")]
    GameNotInProgress,
    /// The targeted board has already been won.
    #[display("Board has already been won")]
    BoardAlreadyWon,
}

impl GameError {
    /// Stable machine-checkable reason code.
    pub fn code(&self) -> &'static str {
        (*self).into()
    }
}

/// A two-player match a hosting layer can drive polymorphically.
///
/// One implementation per game variant composes the shared join/leave/move
/// lifecycle instead of inheriting it from a base game class. All operations
/// are synchronous and run to completion before returning; the hosting layer
/// is responsible for serializing calls on a single match instance.
/// Independent matches share no state.
pub trait Match {
    /// Move type accepted by [`Match::apply_move`].
    type Move;
    /// Serializable state snapshot broadcast to clients.
    type Snapshot: Serialize;

    /// Seats a player in the first open slot.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyJoined`] if the player holds a slot already,
    /// [`GameError::Full`] if both slots are taken.
    fn join(&mut self, player: &str) -> Result<(), GameError>;

    /// Removes a player from the match, with forfeit semantics once the
    /// match has started.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInGame`] if the player holds no slot.
    fn leave(&mut self, player: &str) -> Result<(), GameError>;

    /// Validates and applies one move. On failure no state changes.
    ///
    /// # Errors
    ///
    /// Any of the move-validation codes on [`GameError`].
    fn apply_move(&mut self, mv: Self::Move) -> Result<(), GameError>;

    /// Read-only snapshot of the current match state.
    fn snapshot(&self) -> Self::Snapshot;
}
