use clap::{Parser, Subcommand};
use eyre::{eyre, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bellman_paths::{EngineConfig, RelaxationEngine};

mod display;
mod scenarios;

use display::print_report;
use scenarios::SCENARIOS;

#[derive(Parser)]
#[command(name = "bellman-paths")]
#[command(about = "Bellman-Ford shortest paths on built-in sample graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in graphs (default)
    List,

    /// Compute shortest paths on a built-in graph
    Run {
        /// Scenario name, see `list`
        scenario: String,

        /// Source vertex
        #[arg(long, default_value = "0")]
        source: usize,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Stop relaxing once a round changes nothing
        #[arg(long)]
        stop_when_stable: bool,
    },
}

fn run_list() -> Result<()> {
    for scenario in SCENARIOS {
        println!(
            "{:<16} {} vertices, {} edges  {}",
            scenario.name,
            scenario.vertex_count,
            scenario.edges.len(),
            scenario.description
        );
    }
    Ok(())
}

fn run_scenario(name: &str, source: usize, json: bool, stop_when_stable: bool) -> Result<()> {
    let scenario = scenarios::find(name)
        .ok_or_else(|| eyre!("Unknown scenario: {}. Run `list` for valid options", name))?;
    let store = scenario.build()?;

    let mut config = EngineConfig::from_env();
    if stop_when_stable {
        config = config.with_stop_when_stable(true);
    }

    let result = RelaxationEngine::new(config).compute(&store, source)?;
    info!(
        "Scenario {}: {} rounds, negative cycle: {}",
        scenario.name, result.rounds, result.negative_cycle_detected
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&result)?;
    Ok(())
}

/// Log filter from a `RUST_LOG`-style spec, WARN when the spec is empty
fn log_filter(spec: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(spec)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let spec = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(&spec))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) | None => run_list(),
        Some(Commands::Run {
            scenario,
            source,
            json,
            stop_when_stable,
        }) => run_scenario(&scenario, source, json, stop_when_stable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honors_spec() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_every_scenario_builds() {
        for scenario in SCENARIOS {
            let store = scenario.build().unwrap();
            assert_eq!(store.len(), scenario.edges.len());
        }
    }
}
