//! CLI application for synthetic Italian e-invoices.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, extract, flat, generate};

/// Fattura - generate FatturaElettronica XML files and extract them into spreadsheets
#[derive(Parser)]
#[command(name = "fattura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic invoice XML files
    Generate(generate::GenerateArgs),

    /// Extract invoice XML files into a spreadsheet
    Extract(extract::ExtractArgs),

    /// Flatten XML files into one spreadsheet row per file
    Flatten(flat::FlattenArgs),

    /// Rebuild XML files from a flattened spreadsheet
    Unflatten(flat::UnflattenArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate(args) => generate::run(args, cli.config.as_deref()).await,
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()).await,
        Commands::Flatten(args) => flat::run_flatten(args, cli.config.as_deref()).await,
        Commands::Unflatten(args) => flat::run_unflatten(args).await,
        Commands::Config(args) => config::run(args).await,
    }
}
