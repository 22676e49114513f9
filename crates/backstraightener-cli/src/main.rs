use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod panel;

#[derive(Parser)]
#[command(name = "backstraightener", version, about = "Wheel countdown timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a countdown from the three wheel values
    Start(commands::start::StartArgs),
    /// Show wheel bounds and labels
    Wheels(commands::wheels::WheelsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr so stdout stays clean for the wheels and JSON events.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Start(args) => commands::start::run(args),
        Commands::Wheels(args) => commands::wheels::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
