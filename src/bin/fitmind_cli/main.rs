// ABOUTME: FitMind CLI - terminal client for generating and following fitness plans
// ABOUTME: Keeps the active plan, progress and daily quote in a local JSON store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors
//!
//! Usage:
//! ```bash
//! # Generate a plan locally (AI providers from the environment, templates otherwise)
//! fitmind-cli generate --profile alice.json
//!
//! # Generate through a running server
//! fitmind-cli generate --profile alice.json --server http://127.0.0.1:8081
//!
//! # Follow the plan
//! fitmind-cli show --section diet
//! fitmind-cli complete-workout
//! fitmind-cli complete-goal
//! fitmind-cli progress
//! fitmind-cli quote
//!
//! # Read a section aloud, export, or go back to the form
//! fitmind-cli speak --section workout --out workout.mp3
//! fitmind-cli export --out plan.pdf
//! fitmind-cli reset
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitmind::logging::LoggingConfig;
use fitmind::progress::FileStore;
use fitmind::speech::PlanSection;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitmind-cli",
    about = "FitMind terminal client",
    long_about = "Generate a personalized fitness plan and track progress against it from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file override (default: <data dir>/fitmind/store.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a plan from a profile and make it the active plan
    Generate {
        /// Profile JSON file (same shape as the API body)
        #[arg(long)]
        profile: PathBuf,

        /// Generate through this server instead of locally
        #[arg(long)]
        server: Option<String>,
    },

    /// Show the active plan
    Show {
        /// Print one section in full
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
    },

    /// Mark one workout as completed
    CompleteWorkout,

    /// Mark one weekly goal as completed
    CompleteGoal,

    /// Show progress for the active plan
    Progress,

    /// Show today's motivational quote
    Quote,

    /// Read a plan section aloud
    Speak {
        /// Section to narrate
        #[arg(long, value_enum, default_value = "workout")]
        section: SectionArg,

        /// Where to save provider audio
        #[arg(long, default_value = "fitmind-speech.mp3")]
        out: PathBuf,

        /// Synthesize through this server instead of locally
        #[arg(long)]
        server: Option<String>,
    },

    /// Export the active plan as a PDF
    Export {
        /// Output file (default: <name>_fitness_plan.pdf)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Forget the active plan and return to the profile form
    Reset,
}

/// Plan section selector
#[derive(Clone, Copy, clap::ValueEnum)]
enum SectionArg {
    Workout,
    Diet,
    Tips,
}

impl From<SectionArg> for PlanSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Workout => Self::Workout,
            SectionArg::Diet => Self::Diet,
            SectionArg::Tips => Self::Tips,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let store_path = match cli.store {
        Some(path) => path,
        None => FileStore::default_path()?,
    };
    debug!(path = %store_path.display(), "Using store");
    let store = FileStore::open(store_path)?;

    match cli.command {
        Command::Generate { profile, server } => {
            commands::plan::generate(&store, &profile, server.as_deref()).await?;
        }
        Command::Show { section } => commands::plan::show(&store, section.map(Into::into))?,
        Command::CompleteWorkout => commands::progress::complete_workout(&store)?,
        Command::CompleteGoal => commands::progress::complete_goal(&store)?,
        Command::Progress => commands::progress::show(&store)?,
        Command::Quote => commands::progress::quote(&store)?,
        Command::Speak {
            section,
            out,
            server,
        } => {
            commands::speak::speak(&store, section.into(), out, server.as_deref()).await?;
        }
        Command::Export { out } => commands::plan::export(&store, out)?,
        Command::Reset => commands::plan::reset(&store)?,
    }

    Ok(())
}
