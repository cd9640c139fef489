//! Console tic-tac-toe
//!
//! The [`board`] module owns the 3x3 grid and the terminal-condition
//! queries, [`game`] drives a session from an empty board to a win or a
//! draw, and [`console`] supplies the I/O collaborators around them.

/// Board representation and win/draw detection
pub mod board;

/// Session state machine and turn alternation
pub mod game;

/// Console I/O collaborators
pub mod console;
