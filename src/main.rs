use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use squad_stats::config::AppConfig;
use squad_stats::export::{ExportDocument, DEFAULT_EXPORT_FILE};
use squad_stats::fetch::{PlayerGenerator, RosterLoader, RosterSource, SportsDbSource, TeamCatalog};
use squad_stats::render::{render, OutputFormat};
use squad_stats::report::build_dashboard;
use squad_stats::roster::RosterState;
use squad_stats::selfcheck::run_self_checks;

#[derive(Parser)]
#[command(name = "squad-stats")]
#[command(about = "Soccer player statistics: efficiency, rankings and team reports")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./squad-stats.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Never call the remote API; always use generated rosters
    #[arg(long)]
    offline: bool,

    /// Seed for generated rosters (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full analysis for the sample roster or a team
    Report {
        /// Team to load first (see `teams`)
        #[arg(long)]
        team: Option<String>,

        /// Output format: text, html or json
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the teams that can be loaded
    Teams,

    /// Export roster and analysis as JSON
    Export {
        /// Team to load first (see `teams`)
        #[arg(long)]
        team: Option<String>,

        /// Destination file
        #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
        out: PathBuf,
    },

    /// Run the built-in transform checks
    Selfcheck,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.offline {
        config.source.enabled = false;
    }
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting squad-stats v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Report {
            team,
            format,
            output,
        } => {
            let state = load_state(&config, team.as_deref()).await?;
            let report = build_dashboard(&state, &config.report)?;
            let rendered = render(&report, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    tracing::info!("Report written to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Teams => {
            println!("\n=== Available Teams ===");
            for team in TeamCatalog::builtin().teams() {
                println!("{:<22} {:<24} {}", team.name, team.league, team.players.join(", "));
            }
        }

        Commands::Export { team, out } => {
            let state = load_state(&config, team.as_deref()).await?;
            let path = ExportDocument::from_state(&state).write_to(&out)?;
            println!("Exported {} players to {}", state.players().len(), path.display());
        }

        Commands::Selfcheck => {
            let results = run_self_checks();
            println!("\n=== Self-check ===");
            for result in &results {
                println!(
                    "{:<18} {}",
                    result.name,
                    if result.passed { "PASS" } else { "FAIL" }
                );
            }
            if results.iter().any(|r| !r.passed) {
                anyhow::bail!("self-check failed");
            }
        }
    }

    Ok(())
}

/// Seeded state, or the named team's roster when one is given.
async fn load_state(config: &AppConfig, team: Option<&str>) -> Result<RosterState> {
    let mut state = RosterState::seeded();
    let Some(team) = team else {
        return Ok(state);
    };

    let loader = build_loader(config)?;
    let outcome = loader.load_team(&mut state, team).await?;
    tracing::info!(
        "Using {} roster for {} ({})",
        outcome.origin,
        outcome.team,
        outcome.league
    );

    Ok(state)
}

fn build_loader(config: &AppConfig) -> Result<RosterLoader> {
    let generator = Arc::new(PlayerGenerator::new(config.seed));
    let catalog = TeamCatalog::builtin();

    if !config.source.enabled {
        return Ok(RosterLoader::offline(catalog, generator));
    }

    let source: Arc<dyn RosterSource> = Arc::new(
        SportsDbSource::new(config.source.fetcher_config(), Arc::clone(&generator))
            .context("building HTTP client")?,
    );
    Ok(RosterLoader::new(catalog, Some(source), generator))
}
