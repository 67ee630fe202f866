//! CLI entry point for the Titanic survival statistics tool.
//!
//! Loads the passenger table once and prints or exports one of the grouped
//! tables, or the full dashboard report.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use titanic_stats::analyzers::demographic::{compare_men_children, comparison_bars};
use titanic_stats::analyzers::family::{check_large_families, family_groups};
use titanic_stats::analyzers::report::build_report;
use titanic_stats::analyzers::surname::{last_names, ranked};
use titanic_stats::analyzers::survival::survival_demographics;
use titanic_stats::config::AnalysisConfig;
use titanic_stats::output::{print_json, print_pretty, write_json, write_records};
use titanic_stats::source::load_from_arg;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "titanic_stats")]
#[command(
    about = "Grouped survival and fare statistics for the Titanic passenger list",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Passenger CSV file, or `-` for stdin
    #[arg(short, long, env = "TITANIC_DATA_PATH", default_value = "data/titanic.csv")]
    input: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Survival counts per class, sex and age group (always 24 rows)
    Survival {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write the table to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Surviving men versus surviving children per class
    Demographic {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write the table to
        #[arg(short, long)]
        output: Option<String>,

        /// Emit long-format chart rows instead of one row per class
        #[arg(long, default_value_t = false)]
        bars: bool,
    },
    /// Fare statistics per class and family size
    Families {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write the table to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Large families of one class against the average fare of another
    LargeFamilies {
        #[command(flatten)]
        input: InputArgs,

        /// JSON file overriding the analysis parameters
        #[arg(long)]
        config: Option<String>,
    },
    /// Passenger counts per last name, most common first
    Surnames {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write the table to
        #[arg(short, long)]
        output: Option<String>,

        /// Only keep the N most common last names
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// Every table in one JSON document
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// JSON file to write the report to
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file overriding the analysis parameters
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/titanic_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("titanic_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Survival { input, output } => {
            let dataset = load_from_arg(&input.input)?;
            let cells = survival_demographics(dataset.passengers());
            emit(&cells, output.as_deref())?;
        }
        Commands::Demographic {
            input,
            output,
            bars,
        } => {
            let dataset = load_from_arg(&input.input)?;
            let passengers = dataset.passengers();
            let comparison = compare_men_children(&survival_demographics(passengers), passengers);

            for row in &comparison {
                info!(
                    pclass = %row.pclass,
                    men_survivors = row.men_survivors,
                    child_survivors = row.child_survivors,
                    difference = row.difference_men_minus_children,
                    more_men_than_children = row.more_men_than_children(),
                    "Class comparison"
                );
            }

            if bars {
                emit(&comparison_bars(&comparison), output.as_deref())?;
            } else {
                emit(&comparison, output.as_deref())?;
            }
        }
        Commands::Families { input, output } => {
            let dataset = load_from_arg(&input.input)?;
            let cells = family_groups(dataset.passengers());
            emit(&cells, output.as_deref())?;
        }
        Commands::LargeFamilies { input, config } => {
            let config = AnalysisConfig::load_or_default(config.as_deref())?;
            let dataset = load_from_arg(&input.input)?;
            let check = check_large_families(dataset.passengers(), &config);

            info!(
                target_class = %check.target_class,
                min_family_size = check.min_family_size,
                baseline_class = %check.baseline_class,
                baseline_fare = ?check.baseline_fare,
                n_groups_total = check.n_groups_total,
                n_groups_meeting = check.n_groups_meeting,
                "Large family check"
            );
            print_json(&check)?;
        }
        Commands::Surnames { input, output, top } => {
            let dataset = load_from_arg(&input.input)?;
            let mut rows = ranked(&last_names(dataset.passengers()));
            if let Some(top) = top {
                rows.truncate(top);
            }
            emit(&rows, output.as_deref())?;
        }
        Commands::Report {
            input,
            output,
            config,
        } => {
            let config = AnalysisConfig::load_or_default(config.as_deref())?;
            let dataset = load_from_arg(&input.input)?;
            let report = build_report(dataset.passengers(), &config);

            match output {
                Some(path) => {
                    write_json(&path, &report)?;
                    info!(path = %path, "Report written");
                }
                None => print_json(&report)?,
            }
        }
    }

    Ok(())
}

/// Writes rows to a CSV file when a path is given, otherwise logs them as JSON.
fn emit<T>(rows: &[T], output: Option<&str>) -> Result<()>
where
    T: serde::Serialize + std::fmt::Debug,
{
    print_pretty(&rows);
    match output {
        Some(path) => {
            write_records(path, rows)?;
            info!(path = %path, rows = rows.len(), "Table written");
        }
        None => print_json(rows)?,
    }
    Ok(())
}
