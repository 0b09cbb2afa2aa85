use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    ConfigCommand, ExportCommand, ImportCommand, MealCommand, RecipeCommand, WorkoutCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "vitasync")]
#[command(version)]
#[command(about = "Track workouts, meal macros and recipes", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and review workout sessions
    Workout(WorkoutCommand),

    /// Manage the meal plan
    Meal(MealCommand),

    /// Manage the recipe library
    Recipe(RecipeCommand),

    /// Save the data document as JSON
    Export(ExportCommand),

    /// Load the data document from a JSON file
    Import(ImportCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitasync=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;
    let store = config.store();
    tracing::debug!("Using data file {}", store.path().display());

    match cli.command {
        Some(Commands::Workout(cmd)) => cmd.run(&store, &config)?,
        Some(Commands::Meal(cmd)) => cmd.run(&store, &config)?,
        Some(Commands::Recipe(cmd)) => cmd.run(&store, &config)?,
        Some(Commands::Export(cmd)) => cmd.run(&store, &config)?,
        Some(Commands::Import(cmd)) => cmd.run(&store)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
