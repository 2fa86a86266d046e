//! `slots` CLI: compute a week of free half-hour slots from an events store.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for the week starting 2014-08-10 (store read from stdin)
//! cat events.json | slots week --from 2014-08-10
//!
//! # From file to file, pretty-printed
//! slots week --from 2018-01-08 -i events.json -o week.json --pretty
//!
//! # Resolve offset timestamps in a given zone
//! SLOTS_TZ=Europe/Paris slots week -i events.json
//!
//! # Show the candidate events after weekly templates are projected
//! slots project --from 2014-08-10 -i events.json
//! ```
//!
//! The store is a JSON array of rows shaped like
//! `{"kind": "opening", "starts_at": "2014-08-04 09:30", "ends_at": "2014-08-04 12:30", "weekly_recurring": true}`.

mod fetch;

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use slot_engine::record::{decode_records, parse_timezone};
use slot_engine::week::{compute_week, parse_period_start, window_dates};
use slot_engine::{project_all, Event};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slots", version, about = "Weekly free-slot calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine diagnostics at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute free slots for the 7 days starting at --from
    Week {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// Print the candidate events with weekly templates projected onto the window
    Project {
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// First day of the window (YYYY-MM-DD); defaults to today in --tz
    #[arg(long, env = "SLOTS_FROM")]
    from: Option<String>,
    /// Events store as a JSON array (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// IANA timezone used to read offset timestamps as wall-clock time
    #[arg(long, env = "SLOTS_TZ", default_value = "UTC")]
    tz: String,
}

/// A resolved query: the window start and the events the store selected for it.
struct Query {
    start: NaiveDate,
    events: Vec<Event>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Week {
            query,
            output,
            pretty,
        } => {
            let query = load_query(&query)?;
            let week = compute_week(query.start, &query.events)
                .context("Failed to compute availabilities")?;

            let json = if pretty {
                serde_json::to_string_pretty(&week)?
            } else {
                serde_json::to_string(&week)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Project { query } => {
            let query = load_query(&query)?;
            let dates = window_dates(query.start)?;
            let projected = project_all(&query.events, &dates);
            let json = serde_json::to_string_pretty(&projected)?;
            write_output(None, &json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "slots=debug,slot_engine=debug"
    } else {
        "slots=info,slot_engine=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Resolve the window start, read the store and select candidate events.
fn load_query(args: &QueryArgs) -> Result<Query> {
    let tz: Tz = parse_timezone(&args.tz)?;

    let start = match args.from.as_deref() {
        Some(from) => parse_period_start(from)?,
        None => Utc::now().with_timezone(&tz).date_naive(),
    };

    let json = read_input(args.input.as_deref())?;
    let decoded = decode_records(&json, tz).context("Events store must be a JSON array")?;
    for rejected in &decoded.rejected {
        tracing::warn!(
            row = rejected.index,
            reason = %rejected.reason,
            "skipping unreadable event row"
        );
    }

    let events = fetch::select_candidates(&decoded.events, start)?;
    tracing::info!(
        %start,
        rows = decoded.events.len() + decoded.rejected.len(),
        candidates = events.len(),
        "selected candidate events"
    );

    Ok(Query { start, events })
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
