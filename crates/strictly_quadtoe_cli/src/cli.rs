//! Command-line interface for quadtoe.

use clap::{Parser, Subcommand};
use strictly_quadtoe::Coord;

/// Strictly Quadtoe - four-by-four tic-tac-toe rules engine driver
#[derive(Parser, Debug)]
#[command(name = "quadtoe")]
#[command(about = "Replay scripted moves through the quadtoe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a list of moves, alternating players starting with A
    Play {
        /// Path to an engine config (TOML). Defaults are used if omitted.
        #[arg(long)]
        config: Option<std::path::PathBuf>,

        /// Print engine notifications as JSON lines
        #[arg(long)]
        json: bool,

        /// Moves as ROW,COLUMN (zero-based)
        #[arg(required = true, value_parser = parse_coord)]
        moves: Vec<Coord>,
    },

    /// List the win patterns in evaluation order
    Rules,
}

/// Parses `ROW,COLUMN` into a coordinate.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("Expected ROW,COLUMN, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("Invalid row {:?}: {}", row, e))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("Invalid column {:?}: {}", column, e))?;
    Ok(Coord::new(row, column))
}
