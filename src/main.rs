use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use safeclue::Config;
use safeclue::core::{
    MockStore,
    estimator::{self, DEFAULT_PLOT_SIZE, FinishQuality},
    format::{format_inr, format_safe_coins, mask_mobile},
    geofence::{CheckInOutcome, FixedLocation, verify_location},
    summary::{self, DEFAULT_MODEL},
    timeline,
};
use safeclue::models::Coordinates;

#[derive(Parser)]
#[command(name = "safeclue")]
#[command(about = "Track construction projects, payments and site check-ins")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API key for the progress summary service
    #[arg(long, env = "API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Model used for progress summaries
    #[arg(long, env = "SAFECLUE_MODEL", default_value = DEFAULT_MODEL, global = true)]
    model: String,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a position is close enough to a project site
    CheckIn {
        #[arg(long, value_name = "ID")]
        project: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Summarize a project's progress
    Summary {
        #[arg(long, value_name = "ID")]
        project: String,
        /// Full report including description and recent updates
        #[arg(long)]
        detailed: bool,
    },
    /// Estimate construction cost for a plot
    Estimate {
        #[arg(long, value_name = "SQFT", default_value_t = DEFAULT_PLOT_SIZE)]
        plot_size: u64,
        #[arg(long, default_value_t = FinishQuality::Standard)]
        quality: FinishQuality,
    },
    /// Print the users and projects tables
    Tables,
    /// Launch the desktop app
    #[cfg(feature = "gui")]
    Gui {
        /// Device latitude used for admin check-ins
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Device longitude used for admin check-ins
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::new(args.api_key, args.model, args.verbose);
    init_tracing(&config);
    debug!(model = %config.model, api_key = config.has_api_key(), "configuration loaded");

    match args.command {
        Command::CheckIn { project, lat, lng } => check_in(&project, Coordinates::new(lat, lng), args.json),
        Command::Summary { project, detailed } => summarize(&config, &project, detailed),
        Command::Estimate { plot_size, quality } => {
            let estimate = estimator::estimate(plot_size, quality);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("Plot size: {} sq ft", estimate.plot_size);
                println!("Quality:   {} ({}/sq ft)", estimate.quality, format_inr(estimate.rate as f64));
                println!("Estimate:  {}", format_inr(estimate.total as f64));
            }
            Ok(())
        }
        Command::Tables => tables(args.json),
        #[cfg(feature = "gui")]
        Command::Gui { lat, lng } => safeclue::gui::run(config, lat, lng),
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to start async runtime")
}

fn check_in(project_id: &str, position: Coordinates, json: bool) -> anyhow::Result<()> {
    let store = MockStore::seeded();
    let project = store.project(project_id)?;
    let outcome = runtime()?.block_on(verify_location(&FixedLocation(position), project.coords));

    if json {
        let distance = match &outcome {
            CheckInOutcome::Accepted { distance_km }
            | CheckInOutcome::Rejected { distance_km } => Some(*distance_km),
            CheckInOutcome::LocationUnavailable { .. } => None,
        };
        let value = json!({
            "project": project.id,
            "site": project.coords,
            "position": position,
            "distanceKm": distance,
            "accepted": outcome.is_accepted(),
            "message": outcome.message(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} {}", project.name, project.coords);
        println!("{}", outcome.message());
    }
    Ok(())
}

fn summarize(config: &Config, project_id: &str, detailed: bool) -> anyhow::Result<()> {
    let store = MockStore::seeded();
    let project = store.project(project_id)?;
    let backend = config.summary_backend();
    let text = runtime()?.block_on(async {
        if detailed {
            summary::detailed_report(&backend, project).await
        } else {
            summary::progress_summary(&backend, project).await
        }
    });
    println!("=== {} ===", project.name);
    println!("{text}");
    Ok(())
}

fn tables(json: bool) -> anyhow::Result<()> {
    let store = MockStore::seeded();
    if json {
        let value = json!({
            "users": store.accounts(),
            "projects": store.projects(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("=== Users ===");
    println!("{:<5} {:<14} {:<26} {:<12} {:<16} {:>10}", "ID", "Name", "Email", "Mobile", "Role", "SafeCoins");
    for account in store.accounts() {
        println!(
            "{:<5} {:<14} {:<26} {:<12} {:<16} {:>10}",
            account.id,
            account.name,
            account.email.as_deref().unwrap_or("-"),
            mask_mobile(&account.mobile),
            account.role.to_string(),
            format_safe_coins(account.safe_coin_balance)
        );
    }

    println!("\n=== Projects ===");
    println!("{:<4} {:<20} {:<24} {:<14} {:>8}", "ID", "Name", "Location", "Owner", "Progress");
    for project in store.projects() {
        println!(
            "{:<4} {:<20} {:<24} {:<14} {:>7}%",
            project.id,
            project.name,
            project.location,
            project.user_id,
            timeline::overall_progress(&project.timeline)
        );
    }
    Ok(())
}
