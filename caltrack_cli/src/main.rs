use caltrack_core::*;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

mod repl;

#[derive(Parser)]
#[command(name = "caltrack")]
#[command(about = "Calorie and macro goal tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI and its category
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimetres
        #[arg(long)]
        height: f64,
    },

    /// Start an interactive tracking session on stdin (default)
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        caltrack_core::logging::init_with_level("debug");
    } else {
        caltrack_core::logging::init_with_level("warn");
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Bmi { weight, height }) => cmd_bmi(weight, height),
        Some(Commands::Session) | None => cmd_session(&config),
    }
}

fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    let bmi = compute_bmi(weight, height)?;
    println!("BMI: {:.2}", bmi);
    println!("Category: {}", classify(bmi));
    Ok(())
}

fn cmd_session(config: &Config) -> Result<()> {
    let mut store = MemorySessionStore::new();
    let session = TrackingSession::new(config.profile.biometrics(), config.goals.goals());
    let id = store.create(session);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = repl::run(
        stdin.lock(),
        stdout.lock(),
        &mut store,
        id,
        &config.exercise.rate(),
    );

    store.discard(id);
    outcome
}
