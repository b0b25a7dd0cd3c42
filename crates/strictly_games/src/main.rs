//! Strictly Games - tic-tac-toe solver CLI
//!
//! Thin front end over `strictly_tictactoe`: parses boards, runs the solver and
//! prints reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{OutputFormat, SolverConfig};
use report::{SelfPlayReport, SolveReport};
use strictly_tictactoe::{initial_state, self_play, Board, Minimax};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = SolverConfig::load_or_default(&cli.config)?;
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let solver = Minimax::new(*config.tie_break());

    match cli.command {
        Command::Solve { board } => run_solve(&board, &solver, *config.output()),
        Command::Selfplay { from } => run_selfplay(from.as_deref(), &solver, *config.output()),
    }
}

/// Analyze one board and print the optimal action.
#[instrument(skip(solver))]
fn run_solve(board: &str, solver: &Minimax, output: OutputFormat) -> Result<()> {
    let board = board.parse::<Board>().context("Invalid board")?;
    info!(%board, "Solving position");

    let report = SolveReport::new(&board, solver);
    emit(&report, report.render_text(), output)
}

/// Play a game out with the solver on both sides.
#[instrument(skip(solver))]
fn run_selfplay(from: Option<&str>, solver: &Minimax, output: OutputFormat) -> Result<()> {
    let start = match from {
        Some(text) => text.parse::<Board>().context("Invalid starting board")?,
        None => initial_state(),
    };
    info!(board = %start, tie_break = %solver.tie_break(), "Starting self-play");

    let game = self_play(&start, solver)?;
    let report = SelfPlayReport::new(&start, &game)?;
    info!(outcome = %report.outcome(), "Self-play complete");
    emit(&report, report.render_text(), output)
}

fn emit<T: serde::Serialize>(report: &T, text: String, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
