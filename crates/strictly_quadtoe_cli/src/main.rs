//! Strictly Quadtoe - headless driver
//!
//! Feeds scripted moves into the engine and reports what it notifies.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_quadtoe::{
    Coord, EngineConfig, EventLog, GameEngine, GameEvent, MoveOutcome, WinPattern,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            json,
            moves,
        } => run_play(config, json, &moves),
        Command::Rules => {
            print_rules();
            Ok(())
        }
    }
}

/// Replay the moves and print the notifications and final board
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_play(config: Option<std::path::PathBuf>, json: bool, moves: &[Coord]) -> Result<()> {
    let config = match config {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut engine = GameEngine::with_observer(config, EventLog::new())?;
    let replay = engine.replay(moves).context("Replaying moves")?;
    info!(applied = replay.applied(), ignored = replay.ignored(), "Replay finished");

    for event in engine.observer().events() {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            print_event(&engine, event);
        }
    }

    if !json {
        println!("\n{}\n", engine.board().display());
        match replay.outcome() {
            Some(MoveOutcome::Won {
                winner, pattern, ..
            }) => println!("Player {} wins by {}", winner, pattern),
            Some(MoveOutcome::Draw) => println!("Draw"),
            Some(MoveOutcome::Continuing { next_player }) => {
                println!("Game in progress, player {} to move", next_player)
            }
            None => println!("No moves played"),
        }
        if *replay.ignored() > 0 {
            println!("{} move(s) after the end of the game were ignored", replay.ignored());
        }
    }

    Ok(())
}

fn print_event<O>(engine: &GameEngine<O>, event: &GameEvent) {
    match event {
        GameEvent::StatusChanged { status } => println!("status: {}", status),
        GameEvent::GameOver { matched_cells } => {
            let cells = matched_cells
                .iter()
                .map(|cell| cell.coord().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let name = matched_cells
                .first()
                .and_then(|cell| cell.state.owner())
                .and_then(|id| engine.player(id))
                .map(|player| player.name().as_str())
                .unwrap_or("?");
            println!("game over: {} matched {}", name, cells);
        }
    }
}

fn print_rules() {
    let patterns = [
        (WinPattern::Row(0), "every cell in the move's row"),
        (WinPattern::Column(0), "every cell in the move's column"),
        (
            WinPattern::PrincipalDiagonal,
            "top-left to bottom-right, for moves on it",
        ),
        (
            WinPattern::SecondaryDiagonal,
            "top-right to bottom-left, for moves on it",
        ),
        (WinPattern::Corners, "all four corners, for corner moves"),
    ];
    for (rank, (pattern, text)) in patterns.iter().enumerate() {
        let name = match pattern {
            WinPattern::Row(_) => "row".to_string(),
            WinPattern::Column(_) => "column".to_string(),
            other => other.to_string(),
        };
        println!("{}. {}: {}", rank + 1, name, text);
    }
    println!(
        "{}. 2x2 box: any box having the move as a corner",
        patterns.len() + 1
    );
}
