use std::io::{self, BufRead, Stdout, StdoutLock, Write};

use anyhow::{Result, bail};
use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};

use crate::{
    board::{Player, Position},
    game::{GameStatus, Outcome, Session},
};

/// Source of validated moves for the game loop
///
/// Implementations do not return until they hold a position denoting one of
/// the 9 cells; malformed requests are re-solicited, not surfaced. An error
/// means the source itself is gone (e.g. stdin closed), which ends the
/// session.
pub trait InputSource {
    fn request_move(&mut self, player: Player) -> Result<Position>;
}

/// Interactive input reading integer positions line by line
///
/// Non-numeric or out-of-range input is silently re-prompted until the
/// player supplies a valid position.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl ConsoleInput<io::StdinLock<'static>, Stdout> {
    /// Prompting on stdout, reading from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn request_move(&mut self, player: Player) -> Result<Position> {
        loop {
            write!(
                self.prompt,
                "Enter a board position ({min}-{max}, {player}): ",
                min = Position::MIN,
                max = Position::MAX,
            )?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for a move from {player}");
            }

            match line.trim().parse::<u8>().map(Position::new) {
                Ok(Ok(pos)) => return Ok(pos),
                // Re-solicit on anything that is not an integer in range
                Ok(Err(invalid)) => log::debug!("Rejected move request: {invalid}"),
                Err(_) => log::debug!("Rejected move request: not an integer"),
            }
        }
    }
}

/// Clears the terminal and homes the cursor
///
/// Purely cosmetic, no effect on game state.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    crossterm::execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Session orchestration: render, request a move, apply, repeat
#[derive(Debug)]
pub struct GameLoop<I, W> {
    session: Session,
    input: I,
    output: W,
    clear: bool,
}

impl GameLoop<ConsoleInput<io::StdinLock<'static>, Stdout>, StdoutLock<'static>> {
    /// Interactive game on the standard streams
    pub fn stdio(first_player: Player) -> Self {
        Self::new(first_player, ConsoleInput::stdio(), io::stdout().lock())
    }
}

impl<I: InputSource, W: Write> GameLoop<I, W> {
    pub fn new(first_player: Player, input: I, output: W) -> Self {
        Self {
            session: Session::new(first_player),
            input,
            output,
            clear: false,
        }
    }

    /// Builder: clear the screen after every applied move
    pub fn clear_between_turns(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Runs the session to completion and reports the outcome
    ///
    /// Each iteration renders the board, obtains a validated move for the
    /// acting player and plays it. On a terminal status the final board and
    /// the outcome message are written before returning.
    pub fn run(mut self) -> Result<Outcome> {
        let GameStatus::InProgress(starter) = self.session.status() else {
            bail!("session is already finished");
        };
        writeln!(self.output, "{starter} will start!")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{board}", board = self.session.board())?;

            match self.session.status() {
                GameStatus::InProgress(player) => {
                    let pos = self.input.request_move(player)?;
                    let status = self.session.play_turn(pos)?;
                    log::debug!(
                        "Turn {turn}: {player} -> {pos} ({status:?})",
                        turn = self.session.turns(),
                    );
                    if self.clear {
                        clear_screen(&mut self.output)?;
                    }
                }
                GameStatus::Finished(outcome) => {
                    writeln!(self.output, "{outcome}")?;
                    log::info!("Session finished after {turns} turns: {outcome:?}", turns = self.session.turns());
                    return Ok(outcome);
                }
            }
        }
    }
}
