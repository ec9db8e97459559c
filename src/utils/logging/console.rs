//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use itertools::Itertools;

use crate::session::RosterView;

/// Render the roster as console text
#[must_use]
pub fn format_roster(view: &RosterView) -> String {
    let mut lines = vec![format!("Student: {}", view.display_name)];

    if view.courses.is_empty() {
        lines.push("  (no courses enrolled)".to_string());
    } else {
        lines.extend(view.courses.iter().map(|line| match line.letter {
            Some(letter) => format!("  - {} [{letter}]", line.label),
            None => format!("  - {}", line.label),
        }));
        lines.push(format!("Courses: {}", view.course_options.iter().join(", ")));
    }

    lines.push(format!("GPA: {}", view.gpa));
    lines.join("\n")
}

/// Print the roster to stdout
pub fn print_roster(view: &RosterView) {
    println!("{}", format_roster(view));
}
