use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::solver::constants::DEFAULT_TOLERANCE;
use twentyfour::utils::{validate_target, validate_tolerance, validate_values};
use twentyfour::{ExpressionSolver, SolverConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - combine numbers with + - * / to reach a target
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "List every fully parenthesized expression over the given numbers that equals the target")]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, separated by spaces or commas
    #[arg(
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub values: Vec<f64>,

    /// Target value to reach
    #[arg(short, long, default_value_t = 24.0, allow_negative_numbers = true)]
    pub target: f64,

    /// Absolute tolerance when comparing against the target
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Stop after this many solutions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub values: Vec<f64>,
    pub target: f64,
    pub solver: SolverConfig,
    pub limit: Option<usize>,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        validate_values(&args.values).context("Invalid input values")?;
        validate_target(args.target).context("Invalid target")?;
        validate_tolerance(args.tolerance).context("Invalid tolerance")?;

        Ok(CliConfig {
            values: args.values,
            target: args.target,
            solver: SolverConfig {
                tolerance: args.tolerance,
                ..SolverConfig::default()
            },
            limit: args.limit,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

/// Print each solution on its own line followed by the count line
pub fn write_report<W: Write>(out: &mut W, solutions: &[String]) -> io::Result<()> {
    for solution in solutions {
        writeln!(out, "{}", solution)?;
    }
    writeln!(out, "There are {} solutions", solutions.len())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);
    let solutions: Vec<String> = match config.limit {
        Some(limit) => {
            info!("Stopping after {} solutions", limit);
            solver
                .solutions(&config.values, config.target)
                .take(limit)
                .map(|expr| expr.to_string())
                .collect()
        }
        None => solver
            .solve(&config.values, config.target)
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    if solutions.is_empty() {
        warn!("No matching expression found");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &solutions).context("Failed to write results")?;
    Ok(())
}
