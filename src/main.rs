//! CLI entry point for the GPA predictor.
//!
//! Provides subcommands for a one-shot projection, an interactive shell and
//! the grade scale reference.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use gpa_predictor::analyzers::aggregate::project;
use gpa_predictor::{
    input::{clamp_prior_cgpa, clamp_prior_credits},
    output::{print_pretty, to_json, write_courses, write_grade_table, write_report},
    parser::{CourseSpec, load_courses, parse_course_spec},
    session::SessionState,
    shell::run_shell,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_predictor")]
#[command(about = "Project SGPA and CGPA from expected course grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute SGPA and projected CGPA for a list of courses
    Predict {
        /// Current CGPA (clamped to 0-10)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cgpa: f64,

        /// Credits completed so far
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        credits: f64,

        /// Course as NAME:CREDITS:GRADE, e.g. "Algorithms:4:A" (repeatable)
        #[arg(short, long = "course", value_name = "NAME:CREDITS:GRADE")]
        courses: Vec<String>,

        /// CSV file with a name,credits,grade header
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print the projection as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Add and remove courses interactively
    Shell {
        /// Current CGPA (clamped to 0-10)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        cgpa: f64,

        /// Credits completed so far
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        credits: f64,
    },
    /// Show the letter grade scale
    Grades,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_predictor.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_predictor.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::from_env("RUST_LOG").add_directive("info".parse::<Directive>()?),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse::<Directive>()?),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Predict {
            cgpa,
            credits,
            courses,
            file,
            json,
        } => {
            let mut specs = Vec::new();
            if let Some(path) = &file {
                specs.extend(load_courses(path)?);
            }
            for raw in &courses {
                specs.push(parse_course_spec(raw)?);
            }

            let state = build_session(cgpa, credits, &specs)?;
            let projection = project(&state);
            print_pretty(&projection);

            if json {
                writeln!(out, "{}", to_json(&projection)?)?;
            } else {
                write_courses(&mut out, state.courses())?;
                writeln!(out)?;
                write_report(&mut out, &projection)?;
            }
        }
        Commands::Shell { cgpa, credits } => {
            let mut state =
                SessionState::with_prior(clamp_prior_cgpa(cgpa), clamp_prior_credits(credits));
            info!(
                prior_cgpa = state.prior_cgpa(),
                prior_credits = state.prior_credits(),
                "Starting interactive shell"
            );
            let stdin = std::io::stdin();
            run_shell(stdin.lock(), &mut out, &mut state)?;
        }
        Commands::Grades => {
            write_grade_table(&mut out)?;
        }
    }

    Ok(())
}

/// Builds a session from the command-line inputs, failing on the first
/// rejected course.
#[tracing::instrument(skip(specs), fields(course_count = specs.len()))]
fn build_session(cgpa: f64, credits: f64, specs: &[CourseSpec]) -> Result<SessionState> {
    let mut state = SessionState::with_prior(clamp_prior_cgpa(cgpa), clamp_prior_credits(credits));

    for spec in specs {
        if let Err(e) = spec.add_to(&mut state) {
            warn!(name = %spec.name, reason = %e, "Course rejected");
            bail!("cannot add course '{}': {e}", spec.name);
        }
    }

    info!(
        courses = state.courses().len(),
        prior_cgpa = state.prior_cgpa(),
        prior_credits = state.prior_credits(),
        "Session ready"
    );
    Ok(state)
}
