//! `agenda` CLI — lay out a fixed-capacity calendar agenda from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out today's agenda from an events file, as JSON render instructions
//! agenda layout -i events.json
//!
//! # Read events from stdin, start on a given day, display in Berlin time
//! cat events.json | agenda layout --start 2026-03-16 --timezone Europe/Berlin
//!
//! # Use a config file and override the date format
//! agenda layout -c agenda.json --date-format "dddd D MMMM" -i events.json
//!
//! # Preview the agenda as plain text
//! agenda layout -i events.json --output text
//!
//! # Print the effective configuration
//! agenda config -c agenda.json
//! ```

mod preview;
mod source;

use agenda_core::{
    layout, AgendaConfig, ArrowFormatter, CalendarSource, MonospaceMeasurer, StaticSource,
    TimelineWindow,
};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "agenda",
    version,
    about = "Fixed-capacity calendar agenda layout for e-paper panels"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the agenda and print its render lines
    Layout {
        #[command(flatten)]
        overrides: ConfigArgs,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First day of the agenda, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// Pixel width of one glyph, used to measure labels in JSON output
        #[arg(long, default_value_t = 7)]
        glyph_width: u32,
        /// Character width of the text preview
        #[arg(long, default_value_t = 60)]
        text_width: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        overrides: ConfigArgs,
    },
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// JSON config file (defaults apply to missing keys)
    #[arg(short, long)]
    config: Option<String>,
    /// IANA timezone the agenda is displayed in (defaults to UTC)
    #[arg(long)]
    timezone: Option<String>,
    /// Module width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Module height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Arrow-style token for day headers, e.g. "ddd D MMM"
    #[arg(long)]
    date_format: Option<String>,
    /// Arrow-style token for event times, e.g. "HH:mm"
    #[arg(long)]
    time_format: Option<String>,
    /// Locale for day and month names, e.g. "en" or "de"
    #[arg(long)]
    language: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout {
            overrides,
            input,
            start,
            glyph_width,
            text_width,
            output,
        } => {
            let config = load_config(&overrides)?;
            let tz = source::resolve_timezone(config.timezone.as_deref())?;

            let start = match start.as_deref() {
                Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("Invalid start date: {}", s))?,
                None => Utc::now().with_timezone(&tz).date_naive(),
            };

            // The core takes a resolved row count; deriving it is our job.
            let capacity = config.max_lines();
            if capacity == 0 {
                anyhow::bail!(
                    "A {}px row does not fit in a {}px tall module",
                    config.row_height(),
                    config.image_size().1
                );
            }
            let window = TimelineWindow::starting_on(start, capacity)?;
            tracing::info!(%start, capacity, timezone = tz.name(), "agenda window");

            let locations = config.calendar_locations().count();
            if locations > 0 {
                tracing::warn!(
                    locations,
                    "iCalendar locations in the config are not fetched; pass events with -i or stdin"
                );
            }

            let raw = read_input(input.as_deref())?;
            let calendar = StaticSource::new(source::parse_events(&raw, tz)?)?;
            let events = calendar.fetch_window(&window, tz.name())?;
            tracing::info!(
                parsed = calendar.len(),
                in_window = events.len(),
                "events loaded"
            );

            match output {
                OutputFormat::Json => {
                    let agenda = layout(
                        &window,
                        events,
                        &config.layout_params(),
                        &ArrowFormatter,
                        &MonospaceMeasurer::new(glyph_width),
                    );
                    println!("{}", serde_json::to_string_pretty(&agenda)?);
                }
                OutputFormat::Text => {
                    let mut params = config.layout_params();
                    params.total_width = text_width;
                    params.row_height = 1;
                    let agenda = layout(
                        &window,
                        events,
                        &params,
                        &ArrowFormatter,
                        &MonospaceMeasurer::new(1),
                    );
                    print!("{}", preview::render_text(&agenda, text_width));
                }
            }
        }
        Commands::Config { overrides } => {
            let config = load_config(&overrides)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the config file (if any), apply flag overrides, and validate.
fn load_config(args: &ConfigArgs) -> Result<AgendaConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            AgendaConfig::from_json(&json)
                .with_context(|| format!("Failed to load config: {}", path))?
        }
        None => AgendaConfig::default(),
    };

    if let Some(tz) = &args.timezone {
        config.timezone = Some(tz.clone());
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(date_format) = &args.date_format {
        config.date_format = date_format.clone();
    }
    if let Some(time_format) = &args.time_format {
        config.time_format = time_format.clone();
    }
    if let Some(language) = &args.language {
        config.language = language.clone();
    }

    config.validate().context("Invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
