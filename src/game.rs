//! Match controller for the three-board quantum variant.
//!
//! [`QuantumTicTacToe`] owns the three sub-boards and orchestrates the
//! quantum rules as the monitor: it validates each move, places or collapses
//! marks, awards board wins, and ends the match when no placement remains.

use crate::action::{Move, MoveRecord, MoveTarget};
use crate::board::{ClassicalMark, PerBoard, SubBoard};
use crate::hosting::{GameError, Match, PlayerId};
use crate::invariants;
use crate::rules;
use crate::snapshot::MatchSnapshot;
use crate::types::{BoardId, MatchStatus, Symbol};
use std::cmp::Ordering;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// One match of quantum tic-tac-toe.
///
/// The controller is a synchronous state machine:
/// `WaitingToStart -> InProgress -> Over`, with a reset back to
/// `WaitingToStart` if the only seated player leaves before an opponent
/// arrives. Every operation validates fully before mutating, so a failed
/// call never leaves a partial update behind.
#[derive(Debug, Clone)]
pub struct QuantumTicTacToe {
    x: Option<PlayerId>,
    o: Option<PlayerId>,
    status: MatchStatus,
    winner: Option<PlayerId>,
    x_score: u8,
    o_score: u8,
    boards: PerBoard<SubBoard>,
    moves: Vec<MoveRecord>,
}

impl QuantumTicTacToe {
    /// Creates an empty match waiting for players.
    #[instrument]
    pub fn new() -> Self {
        Self {
            x: None,
            o: None,
            status: MatchStatus::WaitingToStart,
            winner: None,
            x_score: 0,
            o_score: 0,
            boards: PerBoard::default(),
            moves: Vec::new(),
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Player seated for `symbol`, if any.
    pub fn player(&self, symbol: Symbol) -> Option<&str> {
        match symbol {
            Symbol::X => self.x.as_deref(),
            Symbol::O => self.o.as_deref(),
        }
    }

    /// Winner of the match once it is over. `None` while running or on a draw.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Boards won so far by `symbol`.
    pub fn score(&self, symbol: Symbol) -> u8 {
        match symbol {
            Symbol::X => self.x_score,
            Symbol::O => self.o_score,
        }
    }

    /// The three sub-boards.
    pub fn boards(&self) -> &PerBoard<SubBoard> {
        &self.boards
    }

    /// Chronological list of applied moves.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Symbol expected to make the next move.
    pub fn to_move(&self) -> Symbol {
        Symbol::for_move_index(self.moves.len() as u32)
    }

    /// Seats `player` in the first open slot, X before O. Filling the second
    /// slot starts the match.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyJoined`] if the player holds a slot already,
    /// [`GameError::Full`] if both slots are taken.
    #[instrument(skip(self))]
    pub fn join(&mut self, player: &str) -> Result<(), GameError> {
        if self.x.as_deref() == Some(player) || self.o.as_deref() == Some(player) {
            warn!(player, "join from player already seated");
            return Err(GameError::AlreadyJoined);
        }
        if self.x.is_none() {
            self.x = Some(player.to_owned());
            info!(player, symbol = %Symbol::X, "player seated");
        } else if self.o.is_none() {
            self.o = Some(player.to_owned());
            info!(player, symbol = %Symbol::O, "player seated");
        } else {
            warn!(player, "join rejected, match is full");
            return Err(GameError::Full);
        }
        if self.x.is_some() && self.o.is_some() {
            self.status = MatchStatus::InProgress;
            info!("both seats filled, match started");
        }
        Ok(())
    }

    /// Removes `player` from the match.
    ///
    /// Before the second player arrives this resets the match to a fresh
    /// waiting state. Once the match is running, leaving forfeits it to the
    /// opponent, never a draw. Leaving a finished match changes nothing.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInGame`] if the player holds no slot.
    #[instrument(skip(self))]
    pub fn leave(&mut self, player: &str) -> Result<(), GameError> {
        let leaving_x = self.x.as_deref() == Some(player);
        let leaving_o = self.o.as_deref() == Some(player);
        if !leaving_x && !leaving_o {
            warn!(player, "leave from player without a seat");
            return Err(GameError::NotInGame);
        }
        if self.status == MatchStatus::Over {
            debug!(player, "leave after match end ignored");
            return Ok(());
        }
        if self.o.is_none() {
            // The opponent never arrived; put the match back up for seating.
            info!(player, "player left before start, match reset");
            *self = Self::new();
            return Ok(());
        }
        self.winner = if leaving_x {
            self.o.clone()
        } else {
            self.x.clone()
        };
        self.status = MatchStatus::Over;
        info!(player, winner = ?self.winner, "player forfeited the match");
        Ok(())
    }

    /// Validates then applies `mv`.
    ///
    /// On success the move is recorded with the next global index, any closed
    /// entanglement cycle collapses, then win detection and end-of-match
    /// detection run in that order. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameNotInProgress`] unless the match is running
    /// - [`GameError::PositionOccupied`] for resolved cells, for classical
    ///   moves onto any marked cell, and for cells already holding two
    ///   spooky marks
    /// - [`GameError::BoardAlreadyWon`] if a targeted board is locked
    /// - [`GameError::NotYourTurn`] for wrong-symbol, wrong-seat, or
    ///   unseated submitters
    #[instrument(skip(self, mv), fields(player = %mv.player, mv = %mv))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.validate_move(&mv)?;

        let index = self.moves.len() as u32;
        match mv.target {
            MoveTarget::Classical { board, position } => {
                self.boards[board].resolve(
                    position,
                    ClassicalMark {
                        symbol: mv.symbol,
                        index,
                    },
                );
                debug!(%board, %position, index, "classical mark placed");
            }
            MoveTarget::Entangled(target) => {
                let position = target.position();
                if rules::closes_cycle(&self.boards, position, target.primary(), target.secondary())
                {
                    debug!(index, "entanglement cycle closed, collapsing");
                    rules::collapse(
                        &mut self.boards,
                        position,
                        mv.symbol,
                        index,
                        target.primary(),
                    );
                } else {
                    self.boards.place_pair(
                        position,
                        target.primary(),
                        target.secondary(),
                        mv.symbol,
                        index,
                    );
                    debug!(index, "spooky pair placed");
                }
            }
        }
        self.moves.push(MoveRecord {
            symbol: mv.symbol,
            target: mv.target,
            index,
        });

        self.check_for_wins();
        self.check_for_game_ending();
        debug_assert!(
            invariants::check_all(self).is_ok(),
            "match invariants violated after commit"
        );
        Ok(())
    }

    /// Read-only snapshot for broadcast to clients.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Validation and bookkeeping
    // ─────────────────────────────────────────────────────────────

    /// Checks every precondition without touching state.
    fn validate_move(&self, mv: &Move) -> Result<(), GameError> {
        if self.status != MatchStatus::InProgress {
            warn!(status = ?self.status, "move while match not in progress");
            return Err(GameError::GameNotInProgress);
        }

        let position = mv.target.position();
        let targeted = mv.target.boards();

        // Resolved cells reject the move ahead of any board-won check.
        for &board in &targeted {
            if self.boards[board].cell(position).is_resolved() {
                warn!(%board, %position, "cell already resolved");
                return Err(GameError::PositionOccupied);
            }
        }
        for &board in &targeted {
            if self.boards[board].won_by().is_some() {
                warn!(%board, "board already won");
                return Err(GameError::BoardAlreadyWon);
            }
        }
        match &mv.target {
            MoveTarget::Classical { board, position } => {
                // Superposed cells only resolve through collapse.
                if !self.boards[*board].is_empty(*position) {
                    warn!(board = %board, position = %position, "classical mark on superposed cell");
                    return Err(GameError::PositionOccupied);
                }
            }
            MoveTarget::Entangled(target) => {
                for board in target.boards() {
                    if !self.boards[board].can_entangle(target.position()) {
                        warn!(%board, position = %target.position(), "cell holds two spooky marks");
                        return Err(GameError::PositionOccupied);
                    }
                }
            }
        }

        if mv.symbol != self.to_move() {
            warn!(symbol = %mv.symbol, expected = %self.to_move(), "move out of turn");
            return Err(GameError::NotYourTurn);
        }
        // Identity mismatches surface as NotYourTurn as well: the slot for
        // the claimed symbol must belong to the submitter.
        if self.player(mv.symbol) != Some(mv.player.as_str()) {
            warn!(player = %mv.player, symbol = %mv.symbol, "player does not own this symbol");
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Scans the sub-boards for new three-in-a-row conditions, awarding
    /// points and locking won boards. A single collapse can win several
    /// boards at once; every one is credited.
    fn check_for_wins(&mut self) {
        for board in BoardId::iter() {
            if self.boards[board].won_by().is_some() {
                continue;
            }
            let Some((symbol, completed)) = rules::check_winner(&self.boards[board]) else {
                continue;
            };
            self.boards[board].set_won(symbol);
            match symbol {
                Symbol::X => self.x_score += 1,
                Symbol::O => self.o_score += 1,
            }
            info!(%board, %symbol, completed, "board won");
        }
    }

    /// Ends the match once no legal placement remains on any board. The
    /// higher board-win score takes the match; equal scores are a draw.
    fn check_for_game_ending(&mut self) {
        if rules::move_available(&self.boards) {
            return;
        }
        self.winner = match self.x_score.cmp(&self.o_score) {
            Ordering::Greater => self.x.clone(),
            Ordering::Less => self.o.clone(),
            Ordering::Equal => None,
        };
        self.status = MatchStatus::Over;
        info!(
            x_score = self.x_score,
            o_score = self.o_score,
            winner = ?self.winner,
            "no moves remain, match over"
        );
    }
}

impl Default for QuantumTicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Match for QuantumTicTacToe {
    type Move = Move;
    type Snapshot = MatchSnapshot;

    fn join(&mut self, player: &str) -> Result<(), GameError> {
        QuantumTicTacToe::join(self, player)
    }

    fn leave(&mut self, player: &str) -> Result<(), GameError> {
        QuantumTicTacToe::leave(self, player)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        QuantumTicTacToe::apply_move(self, mv)
    }

    fn snapshot(&self) -> MatchSnapshot {
        QuantumTicTacToe::snapshot(self)
    }
}
