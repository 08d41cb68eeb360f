//! hours-sync command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Instrument, debug, error, info};

use hours_sync::api::BambooClient;
use hours_sync::calculation::{GeneratedEntries, validate_range};
use hours_sync::commands::{self, AddOutcome, Confirm, Prompt};
use hours_sync::config::{ConfigLoader, ConfigOverrides};
use hours_sync::error::{SyncError, SyncResult};
use hours_sync::holidays::{HolidayProvider, parse_excluded_days};
use hours_sync::logging;
use hours_sync::render;

/// Synchronise working hours with BambooHR
#[derive(Parser, Debug)]
#[command(name = "hours-sync", version, about)]
struct Args {
    /// Path to the JSON or YAML configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    /// BambooHR API key, overrides the configuration file
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// BambooHR employee id, overrides the configuration file
    #[arg(long, global = true)]
    employee_id: Option<u32>,

    /// Holiday CSV file, defaults to the bundled Slovenian calendar
    #[arg(long, global = true)]
    holidays: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the hours logged per day
    List {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
    /// Fill unlogged workdays with generated clock entries
    Add {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Day after the last one to fill (YYYY-MM-DD), never filled itself
        #[arg(long)]
        end: NaiveDate,
        /// Comma separated days to leave empty (YYYY-MM-DD,YYYY-MM-DD)
        #[arg(long, default_value = "")]
        exclude_days: String,
        /// Submit without asking for confirmation
        #[arg(short, long)]
        yes: bool,
        /// Do not treat approved BambooHR time off as days off
        #[arg(long)]
        no_time_off: bool,
    },
    /// Show the required working hours per month of a year
    RequiredHours {
        /// Year to compute, defaults to the current one
        #[arg(long)]
        year: Option<i32>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Add { .. } => "add",
            Command::RequiredHours { .. } => "required-hours",
        }
    }
}

/// A failed run and the exit code it maps to.
struct Failure {
    code: u8,
    error: SyncError,
}

impl Failure {
    fn holidays(error: SyncError) -> Self {
        Self { code: 2, error }
    }
}

/// `--yes`: lists the skipped days and submits without asking.
struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&mut self, generated: &GeneratedEntries) -> SyncResult<bool> {
        print!("{}", render::render_skipped(&generated.skipped));
        Ok(true)
    }
}

impl From<SyncError> for Failure {
    fn from(error: SyncError) -> Self {
        Self { code: 1, error }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let (run_id, span) = logging::run_span(args.command.name());
    match run(args).instrument(span).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            error!(run_id = %run_id, error = %failure.error, "hours-sync failed");
            eprintln!("Error: {}. Aborting", failure.error);
            ExitCode::from(failure.code)
        }
    }
}

async fn run(args: Args) -> Result<(), Failure> {
    let config = ConfigLoader::load_or_default(&args.config)?
        .with_overrides(ConfigOverrides {
            api_token: args.api_key,
            employee_id: args.employee_id,
            holidays_file: args.holidays,
        })
        .into_config();
    debug!(
        employee_id = config.employee_id,
        base_url = %config.api_base_url(),
        "Resolved configuration"
    );

    match args.command {
        Command::List { start, end } => {
            let client = BambooClient::from_config(&config)?;
            let report = commands::list(&client, config.employee_id, start, end).await?;
            print!("{}", render::render_report(&report));
        }
        Command::Add {
            start,
            end,
            exclude_days,
            yes,
            no_time_off,
        } => {
            validate_range(start, end)?;
            let client = BambooClient::from_config(&config)?;
            let excluded = parse_excluded_days(&exclude_days)?;
            let time_off = if no_time_off {
                None
            } else {
                Some(
                    client
                        .fetch_time_off(config.employee_id, start, end)
                        .await
                        .map_err(Failure::holidays)?,
                )
            };
            let calendar =
                commands::load_calendar(&commands::holiday_source(&config), time_off, excluded)
                    .map_err(Failure::holidays)?;

            let mut confirm: Box<dyn Confirm> = if yes {
                Box::new(AcceptAll)
            } else {
                Box::new(Prompt::stdio())
            };
            let mut rng = StdRng::from_entropy();

            let outcome = commands::add(
                &client,
                &calendar,
                config.employee_id,
                start,
                end,
                confirm.as_mut(),
                &mut rng,
            )
            .await?;
            report_outcome(&outcome);
        }
        Command::RequiredHours { year } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let holidays = commands::holiday_source(&config)
                .load()
                .map_err(Failure::holidays)?;
            let report = commands::required_hours(year, &holidays)?;
            print!("{}", render::render_year_report(&report));
        }
    }

    Ok(())
}

fn report_outcome(outcome: &AddOutcome) {
    match outcome {
        AddOutcome::NothingToAdd { skipped } => {
            print!("{}", render::render_skipped(skipped));
            println!("There are no generated entries for specified dates. Exiting the program...")
        }
        AddOutcome::Declined => println!("Exiting the program..."),
        AddOutcome::Submitted { entries } => {
            info!(entries, "Submission finished");
            println!(
                "Successfully populated working hour entries between two dates. Please double-check in Bamboo"
            );
        }
    }
}
