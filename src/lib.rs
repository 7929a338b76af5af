//! Quantum tic-tac-toe game logic.
//!
//! This library implements the rules engine for the three-board tic-tac-toe
//! variant described at <https://www.smbc-comics.com/comic/tic>: a move may
//! claim the same cell on two linked boards at once, closed entanglement
//! chains collapse into classical marks, and every board won scores a point
//! for its owner.
//!
//! # Architecture
//!
//! - **Hosting**: the [`Match`] trait and [`GameError`] reason codes a
//!   hosting layer drives and maps to user-facing messages
//! - **Rules**: pure win, collapse, and end-of-match functions
//! - **Controller**: [`QuantumTicTacToe`], the per-match state machine
//! - **Snapshot**: [`MatchSnapshot`], the serializable view broadcast to clients
//!
//! The crate holds no locks and spawns nothing; the hosting layer serializes
//! calls per match instance.
//!
//! # Example
//!
//! ```
//! use quantum_tictactoe::{MatchStatus, QuantumTicTacToe};
//!
//! let mut game = QuantumTicTacToe::new();
//! game.join("ada")?;
//! game.join("grace")?;
//! assert_eq!(game.snapshot().status, MatchStatus::InProgress);
//! # Ok::<(), quantum_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod game;
mod hosting;
mod position;
mod rules;
mod snapshot;
mod types;

// Match invariants, public for independent checking by hosts and tests
pub mod invariants;

// Crate-level exports - hosting seam
pub use hosting::{GameError, Match, PlayerId};

// Crate-level exports - core domain types
pub use types::{BoardId, MatchStatus, Symbol};

// Crate-level exports - board storage
pub use board::{Cell, ClassicalMark, PerBoard, SpookyMark, SubBoard};

// Crate-level exports - moves
pub use action::{EntangledTarget, Move, MoveRecord, MoveTarget, SameBoard};
pub use position::Position;

// Crate-level exports - match controller and snapshots
pub use game::QuantumTicTacToe;
pub use snapshot::{BoardView, MatchSnapshot};
