//! Argument parsing and the validate → fill → time → report flow.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser as ClapParser};
use pmerge_core::Element;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::colors::Palette;
use crate::config::PmergeConfig;
use crate::error::CliError;
use crate::input::{self, Input};
use crate::report::{Bounds, OutputFormat, RenderOptions, Report};
use crate::timing::{self, TimeUnit};

#[derive(Debug, ClapParser)]
#[command(
    name = "pmergeme",
    version,
    about = "Sort positive integers with Ford-Johnson merge-insertion and time it per container"
)]
pub struct Args {
    /// Positive integers to sort (distinct, optionally prefixed with '+')
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Sort N distinct random values instead of VALUES
    #[arg(long, value_name = "N", conflicts_with = "values")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show at most N values on the Before/After lines
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Decimals printed for timings
    #[arg(long)]
    pub precision: Option<usize>,

    /// Unit for timings
    #[arg(long, value_enum)]
    pub unit: Option<TimeUnit>,

    /// Print comparison counts and reference bounds
    #[arg(long)]
    pub stats: bool,

    /// Use this configuration file instead of searching for pmerge.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse `argv`, then reject `--seed` without `--random`.
    ///
    /// clap lets a missing `--random` through once VALUES are present, since
    /// VALUES conflict with it, so the rule is checked here as well.
    pub fn try_parse_checked<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(argv)?;
        if args.seed.is_some() && args.random.is_none() {
            let mut cmd = Self::command();
            return Err(cmd.error(
                ErrorKind::MissingRequiredArgument,
                "--seed can only be used together with --random <N>",
            ));
        }
        Ok(args)
    }
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub max_value: Element,
    pub render: RenderOptions,
}

impl Settings {
    pub fn resolve(args: &Args, config: &PmergeConfig) -> Self {
        let display = &config.display;
        Settings {
            max_value: config.max_value(),
            render: RenderOptions {
                limit: args.limit.or(display.limit),
                precision: args.precision.unwrap_or(display.precision),
                unit: args.unit.unwrap_or(display.unit),
                stats: args.stats,
                palette: Palette::for_stdout(display.color && !args.no_color),
            },
        }
    }
}

/// Explicit path, else the nearest `pmerge.toml`, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<PmergeConfig, CliError> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading config");
        return Ok(PmergeConfig::load_from(path)?);
    }
    match PmergeConfig::discover()? {
        Some((path, cfg)) => {
            info!(path = %path.display(), "found config");
            Ok(cfg)
        }
        None => {
            debug!("no config file found, using defaults");
            Ok(PmergeConfig::default())
        }
    }
}

/// Validated tokens, or random values when `--random` is given.
pub fn build_input(args: &Args, max_value: Element) -> Result<Input, CliError> {
    let input = match args.random {
        Some(count) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            input::random_input(&mut rng, count, max_value)?
        }
        None => input::parse_tokens(&args.values, max_value)?,
    };
    debug!(elements = input.len(), "input validated");
    Ok(input)
}

/// Fill one container per backing with the same values and time each sort.
pub fn sort_and_time(input: Input) -> Report {
    let n = input.len();
    let mut vec: Vec<Element> = input.values.clone();
    let mut deque: VecDeque<Element> = input.values.iter().copied().collect();

    let measurements = vec![
        timing::measure(&mut vec, n),
        timing::measure(&mut deque, n),
    ];

    Report {
        before: input.tokens,
        after: vec,
        measurements,
        bounds: Bounds::for_len(n),
    }
}

/// Run the whole command and return what should go to stdout.
pub fn run(args: &Args) -> Result<String, CliError> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, &config);
    let input = build_input(args, settings.max_value)?;
    let report = sort_and_time(input);

    match args.format {
        OutputFormat::Text => Ok(report.render_text(&settings.render)),
        OutputFormat::Json => Ok(report.render_json()?),
    }
}
