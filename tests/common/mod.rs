use std::collections::VecDeque;

use anyhow::{Result, bail};

use tictactoe_console::{
    board::{Player, Position},
    console::InputSource,
};

/// Input source replaying a fixed list of positions
pub struct ScriptedInput {
    moves: VecDeque<Position>,
}

impl ScriptedInput {
    /// Panics on a position outside 1-9; scripts are test fixtures
    pub fn new(positions: &[u8]) -> Self {
        Self {
            moves: positions
                .iter()
                .map(|&pos| Position::new(pos).expect("scripted position out of range"))
                .collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn request_move(&mut self, player: Player) -> Result<Position> {
        match self.moves.pop_front() {
            Some(pos) => Ok(pos),
            None => bail!("script exhausted while {player} was to move"),
        }
    }
}

/// Positions filling the board with no three-in-a-row under strict
/// alternation with Cross first: final grid X O X / X O O / O X X
pub const DRAW_SEQUENCE: [u8; 9] = [1, 2, 3, 5, 4, 6, 8, 7, 9];
