//! Shotchart CLI - print NBA shot charts from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::Level;

use shotchart::chart::{render_svg, ChartOptions, Figure};
use shotchart::court::court_shapes;
use shotchart::models::ChartResponse;
use shotchart::pipeline::{QueryResult, ShotQueryPipeline};
use shotchart::players::PlayerRegistry;
use shotchart::stats::{StatsClient, StatsConfig, DEFAULT_BASE_URL};

const DEFAULT_PLAYER: &str = "Brook Lopez";
const DEFAULT_SEASON: &str = "2018-19";

#[derive(Parser)]
#[command(name = "shotchart")]
#[command(author, version, about = "NBA shot chart CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Stats API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Season type sent to the stats API
    #[arg(long, default_value = "Regular Season")]
    season_type: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print a shot chart
    Chart {
        /// Player full name
        #[arg(short, long)]
        player: String,

        /// Season (YYYY-YY) or bare start year
        #[arg(short, long)]
        season: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Show the made/missed legend
        #[arg(long)]
        legend: bool,

        /// Enable hover labels
        #[arg(long)]
        hover: bool,
    },

    /// List players in the built-in registry
    Players {
        /// Case-insensitive name filter
        pattern: Option<String>,

        /// Only active players
        #[arg(long)]
        active: bool,
    },

    /// Print the court overlay shapes as JSON
    Court,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Make/miss totals
    Summary,
    /// Standalone SVG chart
    Svg,
    /// Plotly figure and series as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    // Chart output goes to stdout; everything else to stderr
    let banner = format!("Shotchart CLI v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("{}", banner.cyan().bold());
    eprintln!();

    let config = StatsConfig {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout,
        season_type: cli.season_type.clone(),
        ..Default::default()
    };

    if cli.interactive {
        run_interactive(config)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Chart {
                player,
                season,
                format,
                legend,
                hover,
            } => {
                let options = ChartOptions {
                    show_legend: legend,
                    hover,
                };
                let pipeline = build_pipeline(config)?;
                let rt = build_runtime()?;
                run_chart(&pipeline, &rt, &player, &season, format, &options)?;
            }
            Commands::Players { pattern, active } => {
                list_players(pattern.as_deref().unwrap_or(""), active);
            }
            Commands::Court => {
                let json = serde_json::to_string_pretty(court_shapes())
                    .context("Failed to serialize court shapes")?;
                println!("{}", json);
            }
        }
    } else {
        eprintln!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn build_pipeline(config: StatsConfig) -> Result<ShotQueryPipeline<StatsClient>> {
    let client = StatsClient::new(config).context("Failed to create stats client")?;
    Ok(ShotQueryPipeline::new(client))
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")
}

fn run_chart(
    pipeline: &ShotQueryPipeline<StatsClient>,
    rt: &Runtime,
    player: &str,
    season: &str,
    format: OutputFormat,
    options: &ChartOptions,
) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Fetching shots for {} ({})...", player, season));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = rt.block_on(pipeline.resolve(player, season));

    pb.finish_and_clear();

    if let Some(reason) = result.failure() {
        eprintln!("{}: {}", "Failed".red(), reason.title());
    }

    match format {
        OutputFormat::Summary => print_summary(&result),
        OutputFormat::Svg => {
            let figure = Figure::build(&result, options);
            print!("{}", render_svg(&figure));
        }
        OutputFormat::Json => {
            let figure = Figure::build(&result, options);
            let json = serde_json::to_string_pretty(&ChartResponse::new(&result, figure))
                .context("Failed to serialize chart")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_summary(result: &QueryResult) {
    let QueryResult::Success(data) = result else {
        return;
    };

    let summary = data.summary();
    println!("{}", data.title().yellow().bold());
    println!("{}", "-".repeat(40));
    println!("{:<12} {:>8}", "Attempts", summary.attempts);
    println!("{:<12} {:>8}", "Made", summary.made.to_string().blue());
    println!("{:<12} {:>8}", "Missed", summary.missed.to_string().red());
    println!("{:<12} {:>7.1}%", "FG%", summary.fg_pct * 100.0);
}

fn list_players(pattern: &str, active_only: bool) {
    let registry = PlayerRegistry::builtin();
    let players: Vec<_> = registry
        .search(pattern)
        .into_iter()
        .filter(|p| !active_only || p.is_active)
        .collect();

    if players.is_empty() {
        println!("{}", "No matching players.".red());
        return;
    }

    println!("{:>8} {:<28} {}", "ID", "Name", "Active");
    println!("{}", "-".repeat(45));
    for p in &players {
        let active = if p.is_active {
            "yes".green()
        } else {
            "no".dimmed()
        };
        println!("{:>8} {:<28} {}", p.id.0, p.full_name, active);
    }
}

fn run_interactive(config: StatsConfig) -> Result<()> {
    eprintln!("{}", "Interactive mode".green().bold());

    let theme = ColorfulTheme::default();
    let pipeline = build_pipeline(config)?;
    let rt = build_runtime()?;
    let options = ChartOptions::default();

    loop {
        let choices = vec!["Plot a shot chart", "Search players", "Quit"];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let player: String = Input::with_theme(&theme)
                    .with_prompt("Player name")
                    .default(DEFAULT_PLAYER.to_string())
                    .interact_text()?;

                let season: String = Input::with_theme(&theme)
                    .with_prompt("Season (YYYY-YY or start year)")
                    .default(DEFAULT_SEASON.to_string())
                    .interact_text()?;

                println!();
                run_chart(&pipeline, &rt, &player, &season, OutputFormat::Summary, &options)?;
                println!();
            }
            1 => {
                let pattern: String = Input::with_theme(&theme)
                    .with_prompt("Name contains")
                    .allow_empty(true)
                    .interact_text()?;

                println!();
                list_players(&pattern, false);
                println!();
            }
            2 => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
