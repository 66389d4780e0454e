//! Text parsers for course specs, course CSV files and shell commands.

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::analyzers::grade::Grade;
use crate::error::InvalidInput;
use crate::input::clamp_course_credits;
use crate::session::{CourseEntry, CourseId, SessionState};

/// A course as typed by the user, before it has been validated by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSpec {
    pub name: String,
    pub credits: Option<i64>,
    pub grade: Grade,
}

impl CourseSpec {
    /// Clamps credits to the widget range and submits the course.
    pub fn add_to<'a>(
        &self,
        state: &'a mut SessionState,
    ) -> Result<&'a CourseEntry, InvalidInput> {
        let credits = self.credits.map(clamp_course_credits);
        state.add_course(&self.name, credits, self.grade.points())
    }
}

/// Parses `NAME:CREDITS:GRADE`.
///
/// The string is split from the right, so the name may itself contain
/// colons. `GRADE` is a letter label or a point value; an empty `CREDITS`
/// field means the credits are missing.
///
/// # Errors
///
/// Returns an error if a separator is missing, credits are not an integer,
/// or the grade is not on the scale.
pub fn parse_course_spec(spec: &str) -> Result<CourseSpec> {
    let mut parts = spec.rsplitn(3, ':');
    let grade = parts.next().unwrap_or_default();
    let credits = parts
        .next()
        .ok_or_else(|| anyhow!("expected NAME:CREDITS:GRADE, got '{spec}'"))?;
    let name = parts
        .next()
        .ok_or_else(|| anyhow!("expected NAME:CREDITS:GRADE, got '{spec}'"))?;

    Ok(CourseSpec {
        name: name.to_string(),
        credits: parse_credits(credits)?,
        grade: grade.parse::<Grade>()?,
    })
}

fn parse_credits(raw: &str) -> Result<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let credits = raw
        .parse::<i64>()
        .with_context(|| format!("credits must be a whole number, got '{raw}'"))?;
    Ok(Some(credits))
}

#[derive(Debug, Deserialize)]
struct CourseRow {
    name: String,
    credits: Option<i64>,
    grade: String,
}

/// Reads courses from CSV with a `name,credits,grade` header.
pub fn read_courses<R: Read>(reader: R) -> Result<Vec<CourseSpec>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut specs = Vec::new();

    for (i, result) in rdr.deserialize::<CourseRow>().enumerate() {
        let row: CourseRow = result.with_context(|| format!("malformed course row {}", i + 1))?;
        let grade = row
            .grade
            .parse::<Grade>()
            .with_context(|| format!("course row {} ('{}')", i + 1, row.name))?;
        specs.push(CourseSpec {
            name: row.name,
            credits: row.credits,
            grade,
        });
    }

    Ok(specs)
}

/// Loads a course CSV file from disk.
pub fn load_courses(path: &Path) -> Result<Vec<CourseSpec>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_courses(file)
}

/// A line entered at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add(CourseSpec),
    Remove(CourseId),
    PriorCgpa(String),
    PriorCredits(String),
    List,
    Report,
    Grades,
    Help,
    Quit,
    Empty,
}

/// Parses one shell line. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "add" => ShellCommand::Add(parse_course_spec(rest)?),
        "remove" | "rm" => {
            let id = rest
                .parse::<u64>()
                .with_context(|| format!("expected a course id, got '{rest}'"))?;
            ShellCommand::Remove(CourseId(id))
        }
        "cgpa" => ShellCommand::PriorCgpa(rest.to_string()),
        "credits" => ShellCommand::PriorCredits(rest.to_string()),
        "list" | "ls" => ShellCommand::List,
        "report" => ShellCommand::Report,
        "grades" => ShellCommand::Grades,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_spec_with_label() {
        let spec = parse_course_spec("Algorithms:4:A").unwrap();
        assert_eq!(spec.name, "Algorithms");
        assert_eq!(spec.credits, Some(4));
        assert_eq!(spec.grade, Grade::A);
    }

    #[test]
    fn test_parse_course_spec_with_points_and_colon_in_name() {
        let spec = parse_course_spec("CS 101: Intro:3:8").unwrap();
        assert_eq!(spec.name, "CS 101: Intro");
        assert_eq!(spec.grade, Grade::BPlus);
    }

    #[test]
    fn test_parse_course_spec_missing_credits() {
        let spec = parse_course_spec("Seminar::B").unwrap();
        assert_eq!(spec.credits, None);
    }

    #[test]
    fn test_parse_course_spec_errors() {
        assert!(parse_course_spec("Algorithms").is_err());
        assert!(parse_course_spec("Algorithms:A").is_err());
        assert!(parse_course_spec("Algorithms:four:A").is_err());
        assert!(parse_course_spec("Algorithms:4:Z").is_err());
    }

    #[test]
    fn test_add_to_clamps_credits() {
        let mut state = SessionState::new();
        let low = parse_course_spec("Lab:0:A").unwrap();
        let high = parse_course_spec("Thesis:30:A").unwrap();

        assert_eq!(low.add_to(&mut state).unwrap().credits(), 1);
        assert_eq!(high.add_to(&mut state).unwrap().credits(), 12);
    }

    #[test]
    fn test_add_to_surfaces_invalid_input() {
        let mut state = SessionState::new();
        let blank = parse_course_spec("  :3:A").unwrap();
        let missing = parse_course_spec("Seminar::A").unwrap();

        assert_eq!(blank.add_to(&mut state), Err(InvalidInput::EmptyName));
        assert_eq!(missing.add_to(&mut state), Err(InvalidInput::MissingCredits));
    }

    #[test]
    fn test_read_courses() {
        let data = "name,credits,grade\nChemistry, 3 ,C\nHistory,2,F\nSeminar,,A+\n";
        let specs = read_courses(data.as_bytes()).unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].credits, Some(3));
        assert_eq!(specs[1].grade, Grade::F);
        assert_eq!(specs[2].credits, None);
        assert_eq!(specs[2].grade, Grade::APlus);
    }

    #[test]
    fn test_read_courses_bad_grade() {
        let data = "name,credits,grade\nChemistry,3,Q\n";
        assert!(read_courses(data.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("").unwrap(), ShellCommand::Empty);
        assert_eq!(parse_command("LIST").unwrap(), ShellCommand::List);
        assert_eq!(parse_command("remove 3").unwrap(), ShellCommand::Remove(CourseId(3)));
        assert_eq!(
            parse_command("cgpa 8.5").unwrap(),
            ShellCommand::PriorCgpa("8.5".to_string())
        );
        assert!(matches!(
            parse_command("add Physics Lab:2:B").unwrap(),
            ShellCommand::Add(CourseSpec { ref name, .. }) if name == "Physics Lab"
        ));
    }

    #[test]
    fn test_parse_command_errors() {
        assert!(parse_command("remove x").is_err());
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("add nothing").is_err());
    }
}
