#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging,
    ui::{rejection_message, render_board, run_session, status_message},
    GameEngine, MoveOutcome,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game at the terminal, one cell index per line.
    Play,
    /// Apply a sequence of cell indices and print the resulting game.
    Replay {
        /// Cell indices in move order, X first.
        #[arg(allow_negative_numbers = true)]
        moves: Vec<i64>,
        #[arg(long, help = "Print the final state as JSON instead of a board")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut engine = GameEngine::new();

    match cli.command {
        Commands::Play => {
            println!("Cells are numbered 0-8. Type 'reset' to start over, 'quit' to leave.");
            run_session(&mut engine, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Replay { moves, json } => {
            for idx in moves {
                let result = engine.apply_move(idx);
                if let MoveOutcome::Rejected(reason) = result.outcome {
                    eprintln!("move {} rejected: {}", idx, rejection_message(reason));
                }
            }
            let state = engine.state();
            if json {
                println!("{}", serde_json::to_string(&state)?);
            } else {
                print!("{}", render_board(&state));
                println!("{}", status_message(&state));
            }
        }
    }
    Ok(())
}
