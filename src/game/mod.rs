use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Player, Position};

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Outcome {
    Won { player: Player },
    Drawn,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { player } => write!(f, "{player} has won!"),
            Outcome::Drawn => write!(f, "It's a draw!"),
        }
    }
}

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for a move from the given player
    InProgress(Player),
    /// Terminal, no further moves are accepted
    Finished(Outcome),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game is already finished")]
    GameFinished,
}

/// One playthrough from an empty board to a terminal state
///
/// Owns the board for its whole lifetime; turns strictly alternate between
/// the two players on every move cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Board state
    board: Board,
    /// Session status
    status: GameStatus,
    /// Number of turns consumed so far
    turns: usize,
    /// Positions submitted this session, in order
    history: Vec<Position>,
}

impl Session {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress(first_player),
            turns: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Plays one turn for the current player
    ///
    /// A move targeting an occupied cell is silently dropped by the board,
    /// but the turn is consumed either way and play passes to the opponent;
    /// callers wanting enforcement must check the target cell first.
    ///
    /// The winner, when a line is completed, is the player who just acted,
    /// never the one about to move.
    pub fn play_turn(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        match self.status {
            GameStatus::Finished(_) => Err(SessionError::GameFinished),
            GameStatus::InProgress(player) => {
                self.board.apply_move(pos, player);
                self.history.push(pos);
                self.turns += 1;

                // Win before draw: a full board with a completed line is a win
                self.status = if self.board.has_won() {
                    GameStatus::Finished(Outcome::Won { player })
                } else if self.board.has_drawn() {
                    GameStatus::Finished(Outcome::Drawn)
                } else {
                    GameStatus::InProgress(player.opposite())
                };

                Ok(self.status)
            }
        }
    }
}

impl Default for Session {
    /// Default session lets Cross start
    fn default() -> Self {
        Self::new(Player::Cross)
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{board}", board = self.board)?;
        match self.status {
            GameStatus::InProgress(player) => write!(f, "Current player: {player}"),
            GameStatus::Finished(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// Uniform coin toss for the starting side
///
/// The randomness source is injected so callers can seed it; fairness
/// across repeated sessions is the goal, not unpredictability.
pub fn decide_first_player<R: Rng>(rng: &mut R) -> Player {
    if rng.random() {
        Player::Cross
    } else {
        Player::Nought
    }
}
