//! Domain models for the gradebook
//!
//! This module contains the entity models: a Person, a Student built on top
//! of it, and the grade scale used to score a Student's courses.

pub mod grade;
pub mod person;
pub mod student;
pub mod traits;

// Re-export commonly used types
pub use grade::{Gpa, Grade, GradeBand, GradeScale, LetterGrade, letter_grade};
pub use person::{Age, Person};
pub use student::{CourseEntry, Courses, Student};
pub use traits::PersonLike;
