//! Line-oriented interactive front end.
//!
//! Every change to the session is followed by a full recomputation and a
//! fresh report.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::analyzers::aggregate::project;
use crate::input::{read_prior_cgpa, read_prior_credits};
use crate::output::{write_courses, write_grade_table, write_report};
use crate::parser::{ShellCommand, parse_command};
use crate::session::SessionState;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  add NAME:CREDITS:GRADE   add a course (GRADE is a letter or points)
  remove ID                remove a course by id
  cgpa X                   set the current CGPA (0-10)
  credits N                set the credits completed so far
  list                     show the course list
  report                   show SGPA and projected CGPA
  grades                   show the grade scale
  help                     show this message
  quit                     leave the shell";

/// Reads commands from `input` until it is exhausted or `quit` is entered.
///
/// Bad commands and rejected courses are reported on `out`; they never end
/// the session.
pub fn run_shell<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    state: &mut SessionState,
) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!(line = %line, error = %e, "Unparseable shell input");
                writeln!(out, "error: {e:#}")?;
                write!(out, "{PROMPT}")?;
                out.flush()?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }

        if execute(command, out, state)? {
            write_report(out, &project(state))?;
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    info!(courses = state.courses().len(), "Shell session ended");
    Ok(())
}

/// Applies one command. Returns `true` when the session changed and the
/// results should be recomputed.
fn execute<W: Write>(
    command: ShellCommand,
    out: &mut W,
    state: &mut SessionState,
) -> Result<bool> {
    match command {
        ShellCommand::Add(spec) => match spec.add_to(state) {
            Ok(entry) => {
                writeln!(out, "Added [{}] {}", entry.id(), entry.name())?;
                Ok(true)
            }
            Err(e) => {
                warn!(reason = %e, "Course not added");
                writeln!(out, "error: {e}")?;
                Ok(false)
            }
        },
        ShellCommand::Remove(id) => {
            if !state.remove_course(id) {
                writeln!(out, "No course with id {id}")?;
            }
            Ok(true)
        }
        ShellCommand::PriorCgpa(raw) => {
            state.set_prior_cgpa(read_prior_cgpa(&raw));
            Ok(true)
        }
        ShellCommand::PriorCredits(raw) => {
            state.set_prior_credits(read_prior_credits(&raw));
            Ok(true)
        }
        ShellCommand::List => {
            write_courses(out, state.courses())?;
            Ok(false)
        }
        ShellCommand::Report => Ok(true),
        ShellCommand::Grades => {
            write_grade_table(out)?;
            Ok(false)
        }
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            Ok(false)
        }
        ShellCommand::Quit | ShellCommand::Empty => Ok(false),
    }
}
