mod chart;
mod config;
mod data;
mod error;
mod interleaver;
mod packer;
mod planner;
mod roster;
mod server;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use envconfig::Envconfig;
use log::error;

use crate::config::Config;
use crate::data::SeatingInput;
use crate::error::SeatingError;

#[derive(Parser)]
#[command(version, about = "Interleaves departments across exam rooms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Serve the seating API over HTTP (the default)
    Serve,
    /// Print the seating chart for a roster and a room list
    Chart {
        /// CSV with `Roll Number` and `Department` columns
        people: PathBuf,
        /// CSV with `Room Number`, `Rows` and `Cols` columns
        rooms: PathBuf,
    },
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

fn print_chart(people: &Path, rooms: &Path, max_chart_seats: usize) -> anyhow::Result<()> {
    let input = SeatingInput {
        people: roster::read_people(open(people)?)
            .with_context(|| format!("reading {}", people.display()))?,
        rooms: roster::read_rooms(open(rooms)?)
            .with_context(|| format!("reading {}", rooms.display()))?,
    };
    let output = planner::plan(&input)?;
    print!("{}", chart::render(&output.assignments, max_chart_seats)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::init_from_env().context("reading configuration from environment")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::run_server(&config).await.map_err(Into::into),
        Commands::Chart { people, rooms } => print_chart(&people, &rooms, config.max_chart_seats),
    };

    if let Err(e) = &result {
        if let Some(SeatingError::CapacityExceeded { unseated }) =
            e.downcast_ref::<SeatingError>()
        {
            error!("{} people could not be seated; add rooms and retry", unseated);
        }
    }
    result
}
