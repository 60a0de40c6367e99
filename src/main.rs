mod cli;

use anyhow::Result;
use babar_utils::config::Config;
use babar_utils::{DurationStyle, IdStrategy, Zone};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "babar-utils",
    about = "Formatting and string helpers for profiling reports"
)]
pub struct Args {
    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print one JSON object per result")]
    pub json: bool,

    #[arg(long, global = true, help = "Debug output (config layers and settings)")]
    pub debug: bool,

    #[arg(long, global = true, help = "Trace output")]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// 32-bit string hash of each argument
    Hash {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Split a comma separated list into trimmed items
    Split { text: Option<String> },

    /// Truncate text to at most N characters
    Limit {
        text: String,
        #[arg(short = 'n', long = "max", value_name = "N")]
        max: Option<usize>,
    },

    /// Format epoch milliseconds as YYYY-MM-DD HH:mm:ss
    Date {
        #[arg(required = true, allow_negative_numbers = true)]
        ms: Vec<i64>,
        #[arg(long, env = "BABAR_ZONE", value_parser = parse_zone, help = "local or utc")]
        zone: Option<Zone>,
    },

    /// Format epoch milliseconds as HH:mm:ss
    Time {
        #[arg(required = true, allow_negative_numbers = true)]
        ms: Vec<i64>,
        #[arg(long, env = "BABAR_ZONE", value_parser = parse_zone, help = "local or utc")]
        zone: Option<Zone>,
    },

    /// Format a millisecond duration
    Duration {
        #[arg(required = true, allow_negative_numbers = true)]
        ms: Vec<i64>,
        #[arg(
            long,
            env = "BABAR_DURATION_STYLE",
            value_parser = parse_duration_style,
            help = "clock or compact"
        )]
        style: Option<DurationStyle>,
    },

    /// Generate identifiers
    Id {
        #[arg(
            long,
            env = "BABAR_ID_STRATEGY",
            value_parser = parse_id_strategy,
            help = "legacy or uuid"
        )]
        strategy: Option<IdStrategy>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Print the effective configuration
    Config,
}

fn parse_zone(s: &str) -> Result<Zone, String> {
    Zone::from_str(s).ok_or_else(|| format!("Invalid zone: {}. Use: local, utc", s))
}

fn parse_duration_style(s: &str) -> Result<DurationStyle, String> {
    DurationStyle::from_str(s)
        .ok_or_else(|| format!("Invalid duration style: {}. Use: clock, compact", s))
}

fn parse_id_strategy(s: &str) -> Result<IdStrategy, String> {
    IdStrategy::from_str(s).ok_or_else(|| format!("Invalid id strategy: {}. Use: legacy, uuid", s))
}

fn init_logging(args: &Args) {
    let level = if args.trace {
        tracing::Level::TRACE
    } else if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(&args);

    let config = if let Some(config_path) = &args.config {
        Config::load_from(config_path)?
    } else {
        Config::load()?
    };

    tracing::debug!(
        zone = config.zone().as_str(),
        duration_style = config.duration_style().as_str(),
        id_strategy = config.id_strategy().as_str(),
        default_limit = config.default_limit(),
        "effective settings"
    );

    let ctx = cli::Context { args, config };
    cli::run(&ctx)
}
