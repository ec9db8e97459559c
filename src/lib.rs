//! A Rust library modelling a student's enrollment, grades and GPA.
//!
//! The [`models`] module holds the entities ([`Person`], [`Student`]) and the
//! grade scale. The [`session`] module wraps one student for form-driven
//! front ends, parsing raw input and rendering a [`RosterView`].

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::GradebookConfig;
pub use error::{GradebookError, Result};
pub use models::{
    Age, CourseEntry, Courses, Gpa, Grade, GradeBand, GradeScale, LetterGrade, Person,
    PersonLike, Student, letter_grade,
};
pub use session::{CourseLine, EnrollmentSession, RosterView};

// Utility functions
pub use utils::parse_int_prefix;
