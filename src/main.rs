use anyhow::Context;
use gradebook::utils::logging::console::print_roster;
use gradebook::{EnrollmentSession, GradebookConfig, GradebookError, PersonLike, Student};
use log::{info, warn};
use std::io::{self, BufRead};
use std::path::Path;

const HELP: &str = "\
Commands:
  create <name> <age> <major...>   create the student (once per session)
  enroll <course...>               enroll in a course
  grade <course...> <grade>        record a grade for an enrolled course
  show                             print the course list and GPA
  json                             print the roster as JSON
  greet | study | birthday         talk to the student
  help                             show this help
  quit                             leave";

enum Flow {
    Continue,
    Quit,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GradebookConfig::from_path(Path::new(&path))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => GradebookConfig::default(),
    };

    let mut session = EnrollmentSession::new(config);
    info!("Gradebook ready, type `help` for commands");

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read command from stdin")?;
        match run_command(&mut session, line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => warn!("{e}"),
        }
    }

    Ok(())
}

fn require_student(session: &EnrollmentSession) -> gradebook::Result<&Student> {
    session.student().ok_or(GradebookError::NoStudent)
}

fn show(session: &EnrollmentSession) -> gradebook::Result<()> {
    let view = session.view().ok_or(GradebookError::NoStudent)?;
    print_roster(&view);
    Ok(())
}

fn run_command(session: &mut EnrollmentSession, line: &str) -> gradebook::Result<Flow> {
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command {
        "" => {}
        "create" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            let name = parts.next().unwrap_or_default();
            let age = parts.next().unwrap_or_default();
            let major = parts.next().unwrap_or_default().trim();
            session.create_student(name, age, major)?;
            show(session)?;
        }
        "enroll" => {
            if session.enroll(rest)? {
                show(session)?;
            } else {
                println!("Enter a course name to enroll.");
            }
        }
        "grade" => {
            let (course, grade) = rest
                .rsplit_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            let course = course.trim();
            if session.add_grade(course, grade)? {
                show(session)?;
            } else {
                println!("No grade recorded for '{course}'.");
            }
        }
        "show" => show(session)?,
        "json" => {
            let view = session.view().ok_or(GradebookError::NoStudent)?;
            println!("{}", view.to_json()?);
        }
        "greet" => println!("{}", require_student(session)?.greet()),
        "study" => println!("{}", require_student(session)?.study()),
        "birthday" => {
            let student = session.student_mut()?;
            student.have_birthday();
            println!("{}", student.greet());
        }
        "help" => println!("{HELP}"),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => println!("Unknown command '{other}', type `help` for commands"),
    }

    Ok(Flow::Continue)
}
