//! `schedule` CLI — expand classes, check make-up lessons and build the agenda
//! feed from JSON exports of the class and make-up tables.
//!
//! ## Usage
//!
//! ```sh
//! # Lesson start times of one class (stdin → stdout)
//! echo '{"code":"GD-01","weekday":"Quarta","start_time":"14:00",
//!        "start_date":"2024-01-01","lesson_count":3,"status":"Em Andamento"}' \
//!   | schedule occurrences
//!
//! # Would a make-up lesson clash with the instructor's classes? (exit 2 on conflict)
//! schedule check -i classes.json --instructor 7 --start 2024-01-08T15:00
//!
//! # Agenda feed for the calendar view
//! schedule feed -i classes.json --make-ups make_ups.json -o feed.json
//!
//! # Projected end date and progress of every class
//! schedule progress -i classes.json --today 2024-03-01
//! ```

mod settings;

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use schedule_engine::parse::{format_local, parse_date};
use schedule_engine::{
    check_request, progress_percent, projected_end_date, Conflict, MakeUpLesson, MakeUpRequest,
    RecurringClass,
};
use serde::Serialize;
use tracing::{debug, info};

use settings::{init_logging, AppConfig};

/// Exit code used when a make-up lesson conflicts with a class.
const EXIT_CONFLICT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "schedule",
    version,
    about = "Class occurrence expansion and make-up lesson conflict checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML or JSON) layered over ./schedule.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the lesson start times of one class record
    Occurrences {
        /// Class JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check a proposed make-up lesson against an instructor's classes
    Check {
        /// JSON array of class records (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Make-up request JSON file ({"instructor_id", "start"})
        #[arg(long, conflicts_with_all = ["instructor", "start"])]
        request: Option<String>,
        /// Instructor id of the make-up lesson
        #[arg(long, requires = "start")]
        instructor: Option<i64>,
        /// Start of the make-up lesson, YYYY-MM-DDTHH:MM
        #[arg(long, requires = "instructor")]
        start: Option<String>,
    },
    /// Build the agenda feed from classes and make-up lessons
    Feed {
        /// JSON array of class records (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// JSON array of make-up lesson records
        #[arg(long)]
        make_ups: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show projected end date and progress of each class
    Progress {
        /// JSON array of class records (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<String>,
    },
}

/// Outcome of `check`, shaped like the HTTP response of the scheduling route.
#[derive(Serialize)]
struct CheckOutcome {
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    class_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    occurrence_start: Option<String>,
}

impl From<Option<&Conflict>> for CheckOutcome {
    fn from(conflict: Option<&Conflict>) -> Self {
        match conflict {
            Some(c) => Self {
                status: Conflict::STATUS,
                detail: c.to_string(),
                class_code: Some(c.class_code.clone()),
                occurrence_start: Some(format_local(c.occurrence.start)),
            },
            None => Self {
                status: 200,
                detail: "no conflict".to_string(),
                class_code: None,
                occurrence_start: None,
            },
        }
    }
}

#[derive(Serialize)]
struct ClassProgress {
    code: String,
    projected_end_date: Option<String>,
    progress_percent: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&app_config.log_level, cli.log_level.as_deref(), cli.log_json);
    debug!(?app_config, "configuration loaded");

    let config = &app_config.engine;

    match cli.command {
        Commands::Occurrences { input, output } => {
            let class: RecurringClass = read_json(input.as_deref(), "class")?;
            let starts: Vec<String> = class.occurrences(config).map(format_local).collect();
            info!(class = %class.code, lessons = starts.len(), "expanded class");
            write_json(output.as_deref(), &starts)?;
        }
        Commands::Check {
            input,
            request,
            instructor,
            start,
        } => {
            let request = build_request(request.as_deref(), instructor, start)?;
            let classes: Vec<RecurringClass> = read_json(input.as_deref(), "classes")?;
            let conflict = check_request(&request, &classes, config)
                .context("Failed to check make-up lesson")?;

            write_json(None, &CheckOutcome::from(conflict.as_ref()))?;
            if conflict.is_some() {
                process::exit(EXIT_CONFLICT);
            }
        }
        Commands::Feed {
            input,
            make_ups,
            output,
        } => {
            let classes: Vec<RecurringClass> = read_json(input.as_deref(), "classes")?;
            let make_ups: Vec<MakeUpLesson> = match make_ups.as_deref() {
                Some(path) => read_json(Some(path), "make-ups")?,
                None => Vec::new(),
            };
            let feed = schedule_engine::assemble_feed(&classes, &make_ups, config);
            info!(entries = feed.len(), "assembled agenda feed");
            write_json(output.as_deref(), &feed)?;
        }
        Commands::Progress { input, today } => {
            let classes: Vec<RecurringClass> = read_json(input.as_deref(), "classes")?;
            let today = match today.as_deref() {
                Some(raw) => parse_date(raw).context("Invalid --today")?,
                None => chrono::Local::now().date_naive(),
            };
            write_json(None, &class_progress(&classes, today))?;
        }
    }

    Ok(())
}

fn build_request(
    path: Option<&str>,
    instructor: Option<i64>,
    start: Option<String>,
) -> Result<MakeUpRequest> {
    match (path, instructor, start) {
        (Some(path), _, _) => read_json(Some(path), "request"),
        (None, Some(instructor_id), Some(start)) => Ok(MakeUpRequest {
            instructor_id,
            start,
        }),
        _ => anyhow::bail!("Provide either --request or both --instructor and --start"),
    }
}

fn class_progress(classes: &[RecurringClass], today: NaiveDate) -> Vec<ClassProgress> {
    classes
        .iter()
        .map(|class| ClassProgress {
            code: class.code.clone(),
            projected_end_date: projected_end_date(class.start_date.as_deref(), class.lesson_count)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            progress_percent: progress_percent(
                class.start_date.as_deref(),
                class.lesson_count.unwrap_or(0),
                today,
            ),
        })
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: Option<&str>, what: &str) -> Result<T> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {} JSON", what))
}

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let mut pretty = serde_json::to_string_pretty(value)?;
    pretty.push('\n');
    write_output(path, &pretty)
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
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
