pub mod assembler;
pub mod calendar;
pub mod calisthenics;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod goals;
pub mod language;
pub mod models;
pub mod plan;
pub mod running;
pub mod strength;

#[cfg(test)]
mod test_utils;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use assembler::{DailyPlan, PlanEngine};
pub use config::EngineConfig;
pub use error::PlanError;

pub fn run() -> Result<(), PlanError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  // Logs on stderr, command output on stdout
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = cli::Cli::parse();
  let config = EngineConfig::from_env()?;
  let engine = PlanEngine::new(config.load_plan()?)?;

  let date = args.date.unwrap_or_else(|| config.today(Utc::now()));
  info!(%date, command = ?args.command, "Resolving plan");

  let output = cli::render(&engine, args.command, date, args.json)?;
  print!("{}", output);
  Ok(())
}
