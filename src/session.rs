//! Enrollment session controller
//!
//! An [`EnrollmentSession`] owns the single student a front end works with.
//! It accepts raw form text, parses it the way the enrollment form does, and
//! renders a [`RosterView`] that a front end can display after each change.

use serde::{Deserialize, Serialize};

use crate::config::GradebookConfig;
use crate::error::{GradebookError, Result};
use crate::models::{Age, Grade, LetterGrade, PersonLike, Student};
use crate::utils::input::{parse_int_prefix, parse_int_prefix_as};
use crate::utils::logging::{log_operation, log_operation_complete, log_warning};

/// One rendered row of the course list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLine {
    /// Course name
    pub course: String,
    /// Raw grade, if graded
    pub grade: Option<Grade>,
    /// Letter for the grade, if graded
    pub letter: Option<LetterGrade>,
    /// Text shown in the course list
    pub label: String,
}

/// Everything a front end shows for the current student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterView {
    /// Student name shown as the heading
    pub display_name: String,
    /// Course list in enrollment order
    pub courses: Vec<CourseLine>,
    /// Options for the course selector, in enrollment order
    pub course_options: Vec<String>,
    /// GPA as fixed-point text
    pub gpa: String,
}

impl RosterView {
    /// Render the view as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read the age field of the creation form
fn parse_age(text: &str) -> Result<Age> {
    let value = parse_int_prefix(text)
        .ok_or_else(|| GradebookError::InvalidAge(format!("'{text}' is not a number")))?;
    Age::try_from(value).map_err(|_| {
        if value < 0 {
            GradebookError::InvalidAge(format!("age cannot be negative, got {value}"))
        } else {
            GradebookError::InvalidAge(format!("{value} is out of range"))
        }
    })
}

/// Session holding at most one student
#[derive(Debug, Clone, Default)]
pub struct EnrollmentSession {
    config: GradebookConfig,
    student: Option<Student>,
}

impl EnrollmentSession {
    /// Create a session with the given configuration
    #[must_use]
    pub fn new(config: GradebookConfig) -> Self {
        Self {
            config,
            student: None,
        }
    }

    /// The session configuration
    #[must_use]
    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    /// The current student, if one was created
    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    /// Mutable access to the current student
    pub fn student_mut(&mut self) -> Result<&mut Student> {
        self.student.as_mut().ok_or(GradebookError::NoStudent)
    }

    /// Whether the creation form is locked because a student exists
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.student.is_some()
    }

    /// Create the session's student from form text
    ///
    /// Only one student can be created per session. The age field is read
    /// as a leading integer and must not be negative.
    pub fn create_student(&mut self, name: &str, age: &str, major: &str) -> Result<&Student> {
        if self.is_locked() {
            return Err(GradebookError::StudentAlreadyCreated);
        }

        let age = parse_age(age).inspect_err(|e| log_warning(&e.to_string(), Some(name)))?;

        let student = Student::new(name, age, major).with_scale(self.config.scale.clone());
        log_operation_complete("created student", student.name(), None);
        let student = self.student.insert(student);
        Ok(&*student)
    }

    /// Enroll the student in the course named by the form text
    ///
    /// Empty text is ignored. Returns whether an enrollment happened.
    pub fn enroll(&mut self, course: &str) -> Result<bool> {
        let student = self.student_mut()?;
        if course.is_empty() {
            log_operation("Ignoring empty course name for", student.name());
            return Ok(false);
        }

        student.enroll(course);
        Ok(true)
    }

    /// Record a grade from form text for the selected course
    ///
    /// An empty course or a grade without a leading integer is ignored, as is
    /// a course the student is not enrolled in. Returns whether the grade was
    /// recorded.
    pub fn add_grade(&mut self, course: &str, grade: &str) -> Result<bool> {
        let student = self.student_mut()?;
        if course.is_empty() {
            log_operation("Ignoring grade without a course for", student.name());
            return Ok(false);
        }

        let Some(grade) = parse_int_prefix_as::<Grade>(grade) else {
            log_operation("Ignoring non-numeric grade for", course);
            return Ok(false);
        };

        Ok(student.add_grade(course, grade))
    }

    /// Render the current student, or `None` before one is created
    #[must_use]
    pub fn view(&self) -> Option<RosterView> {
        let student = self.student.as_ref()?;

        let courses = student
            .courses()
            .iter()
            .map(|entry| {
                let label = match entry.grade {
                    Some(grade) => format!("{}: {grade}", entry.course),
                    None => format!("{}: {}", entry.course, self.config.ungraded_label),
                };
                CourseLine {
                    course: entry.course.clone(),
                    grade: entry.grade,
                    letter: entry.grade.map(|grade| student.letter_for(grade)),
                    label,
                }
            })
            .collect();

        Some(RosterView {
            display_name: student.name().to_string(),
            courses,
            course_options: student.courses().names().map(str::to_string).collect(),
            gpa: student
                .gpa()
                .with_decimals(self.config.gpa_decimals)
                .to_string(),
        })
    }
}
