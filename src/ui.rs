#![cfg(feature = "std")]

//! Text presentation for the CLI adapter. Nothing here touches game rules;
//! everything is derived from a [`GameState`] snapshot.

use core::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{Cell, Phase, RejectReason},
    config::BOARD_SIDE,
    game::{GameEngine, GameState},
};

/// A line of user input, translated for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark. The index is forwarded as typed so the engine decides
    /// whether it is in range.
    Move(i64),
    Reset,
    Quit,
}

/// Input that could not be understood at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::Unknown(s) => {
                write!(f, "Unknown command '{}' - enter a cell 0-8, 'reset' or 'quit'", s)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(Command::Reset),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => other
            .parse::<i64>()
            .map(Command::Move)
            .map_err(|_| ParseError::Unknown(input.to_string())),
    }
}

/// One-line status shown under the board.
pub fn status_message(state: &GameState) -> String {
    match state.phase {
        Phase::InProgress => format!("{}'s turn", state.current_player),
        Phase::Won => format!("{} wins!", state.current_player),
        Phase::Draw => "It's a draw!".to_string(),
    }
}

pub fn rejection_message(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::GameOver => "The game is over - type 'reset' to play again.",
        RejectReason::CellOccupied => "That cell is already taken.",
        RejectReason::OutOfRange => "Pick a cell between 0 and 8.",
    }
}

/// Render the grid. Empty cells show their index so players know what to
/// type; cells of the winning line are bracketed.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIDE {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        out.push_str("   ");
        for col in 0..BOARD_SIDE {
            let idx = row * BOARD_SIDE + col;
            let mark = match state.board[idx] {
                Cell::Empty => char::from(b'0' + idx as u8),
                Cell::X => 'X',
                Cell::O => 'O',
            };
            let highlighted = state
                .winning_line
                .is_some_and(|line| line.contains(&idx));
            if col > 0 {
                out.push('|');
            }
            if highlighted {
                out.push('[');
                out.push(mark);
                out.push(']');
            } else {
                out.push(' ');
                out.push(mark);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Drive an interactive game: read commands from `input`, apply them to
/// `engine` and write the board and status to `output` after every call.
/// Returns when `input` is exhausted or the player quits.
pub fn run_session<R, W>(engine: &mut GameEngine, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}{}\n> ", render_board(&engine.state()), status_message(&engine.state()))?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Reset) => engine.reset(),
            Ok(Command::Move(idx)) => {
                if let Some(reason) = engine.apply_move(idx).outcome.rejection() {
                    writeln!(output, "{}", rejection_message(reason))?;
                }
            }
            Err(ParseError::Empty) => {}
            Err(e) => writeln!(output, "{}", e)?,
        }
        let state = engine.state();
        write!(output, "{}{}\n> ", render_board(&state), status_message(&state))?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
