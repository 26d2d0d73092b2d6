//! # Triage Assignment CLI
//!
//! Command-line front end for the assignment core: assign a review task, or inspect
//! the doctor directory the assigner reads from. Results are printed as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::error;

use triage_assignment::config::ConfigManager;
use triage_assignment::logging;
use triage_assignment::{AssignmentRequest, TaskAssigner};

#[derive(Parser, Debug)]
#[command(name = "triage-assign")]
#[command(about = "Assign AI-triage review tasks to doctors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration directory (default: $TRIAGE_ASSIGNMENT_CONFIG_DIR or ./config)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Environment whose override file is applied (default: $TRIAGE_ENV or development)
    #[arg(short, long)]
    environment: Option<String>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assign a review task to a doctor
    Assign {
        /// Patient the triage case belongs to
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        scenario_id: String,
        #[arg(long)]
        task_id: String,
        /// Only consider doctors of this hospital
        #[arg(long)]
        hospital_id: Option<String>,
        #[arg(long)]
        urgency_level: Option<String>,
    },
    /// List candidate doctors with their pending review counts
    Doctors {
        #[arg(long)]
        hospital_id: Option<String>,
    },
    /// Show one doctor with their tasks
    Doctor {
        #[arg(value_name = "DOCTOR_ID")]
        doctor_id: String,
    },
    /// List hospitals known to the directory
    Hospitals,
    /// Print the effective configuration with credentials masked
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    logging::init_with_default_level(level);

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let manager = match &cli.environment {
        Some(environment) => ConfigManager::load_from_directory_with_env(cli.config_dir, environment),
        None => ConfigManager::load_from_directory(cli.config_dir),
    }
    .context("loading configuration")?;

    if let Commands::Config = cli.command {
        return print_json(&manager.debug_config());
    }

    let assigner = TaskAssigner::from_config(manager.config()).context("building assigner")?;

    match cli.command {
        Commands::Assign {
            user_id,
            scenario_id,
            task_id,
            hospital_id,
            urgency_level,
        } => {
            let request = AssignmentRequest {
                user_id,
                scenario_id,
                task_id,
                hospital_id,
                urgency_level,
            };
            let result = assigner.assign_task(&request).await?;
            print_json(&result)
        }
        Commands::Doctors { hospital_id } => {
            let doctors = assigner.available_doctors(hospital_id.as_deref()).await?;
            print_json(&doctors)
        }
        Commands::Doctor { doctor_id } => {
            let record = assigner.directory().get_doctor(&doctor_id).await?;
            print_json(&record)
        }
        Commands::Hospitals => {
            let hospitals = assigner.directory().list_hospitals().await?;
            print_json(&hospitals)
        }
        Commands::Config => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
