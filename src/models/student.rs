//! Student entity model
//!
//! This module contains the Student model, a Person with a major and a set
//! of enrolled courses. Courses keep their enrollment order for display;
//! each one is either ungraded or holds a raw grade.

use super::grade::{Gpa, Grade, GradeScale, LetterGrade};
use super::person::{Age, Person};
use super::traits::PersonLike;
use crate::error::{GradebookError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single enrolled course and its grade, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Course name
    pub course: String,
    /// Raw grade, `None` until graded
    pub grade: Option<Grade>,
}

impl CourseEntry {
    /// Whether the course has a grade
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// Mapping from course name to optional grade, in enrollment order
///
/// Course names are unique; deserializing a list that repeats one fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CourseEntry>", into = "Vec<CourseEntry>")]
pub struct Courses {
    entries: Vec<CourseEntry>,
}

impl TryFrom<Vec<CourseEntry>> for Courses {
    type Error = GradebookError;

    fn try_from(entries: Vec<CourseEntry>) -> Result<Self> {
        if let Some(duplicate) = entries
            .iter()
            .map(|entry| entry.course.as_str())
            .duplicates()
            .next()
        {
            return Err(GradebookError::DuplicateCourse(duplicate.to_string()));
        }
        Ok(Self { entries })
    }
}

impl From<Courses> for Vec<CourseEntry> {
    fn from(courses: Courses) -> Self {
        courses.entries
    }
}

impl Courses {
    /// Create an empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn position(&self, course: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.course == course)
    }

    /// Whether `course` is a key of the mapping
    #[must_use]
    pub fn contains(&self, course: &str) -> bool {
        self.position(course).is_some()
    }

    /// Grade of `course`: `None` when not enrolled, `Some(None)` when ungraded
    #[must_use]
    pub fn get(&self, course: &str) -> Option<Option<Grade>> {
        self.position(course).map(|idx| self.entries[idx].grade)
    }

    /// Insert `course` as ungraded, resetting any existing grade
    ///
    /// Returns the previous grade state if the course was already present.
    /// An existing entry keeps its position.
    pub fn insert_ungraded(&mut self, course: &str) -> Option<Option<Grade>> {
        match self.position(course) {
            Some(idx) => Some(self.entries[idx].grade.take()),
            None => {
                self.entries.push(CourseEntry {
                    course: course.to_string(),
                    grade: None,
                });
                None
            }
        }
    }

    /// Set the grade of an existing key; returns `false` if absent
    pub fn set_grade(&mut self, course: &str, grade: Grade) -> bool {
        match self.position(course) {
            Some(idx) => {
                self.entries[idx].grade = Some(grade);
                true
            }
            None => false,
        }
    }

    /// Iterate over entries in enrollment order
    pub fn iter(&self) -> std::slice::Iter<'_, CourseEntry> {
        self.entries.iter()
    }

    /// Course names in enrollment order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.course.as_str())
    }

    /// Grades in enrollment order, `None` for ungraded courses
    pub fn grades(&self) -> impl Iterator<Item = Option<Grade>> + '_ {
        self.entries.iter().map(|entry| entry.grade)
    }

    /// Number of enrolled courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no course is enrolled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Courses {
    type Item = &'a CourseEntry;
    type IntoIter = std::slice::Iter<'a, CourseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A student: a Person with a major and enrolled courses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// The underlying Person entity
    person: Person,
    /// Field of study, fixed at construction
    major: String,
    /// Enrolled courses and their grades
    courses: Courses,
    /// Scale used to turn grades into points and letters
    #[serde(skip, default)]
    scale: GradeScale,
}

impl Student {
    /// Create a new Student with no courses
    #[must_use]
    pub fn new(name: impl Into<String>, age: Age, major: impl Into<String>) -> Self {
        Self::from_person(Person::new(name, age), major)
    }

    /// Create a new Student from an existing Person
    #[must_use]
    pub fn from_person(person: Person, major: impl Into<String>) -> Self {
        Self {
            person,
            major: major.into(),
            courses: Courses::new(),
            scale: GradeScale::default(),
        }
    }

    /// Use a different grade scale for GPA and letter grades
    #[must_use]
    pub fn with_scale(mut self, scale: GradeScale) -> Self {
        self.scale = scale;
        self
    }

    /// The student's major
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Enrolled courses in enrollment order
    #[must_use]
    pub fn courses(&self) -> &Courses {
        &self.courses
    }

    /// The grade scale in use
    #[must_use]
    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Whether the student is enrolled in `course`
    #[must_use]
    pub fn is_enrolled(&self, course: &str) -> bool {
        self.courses.contains(course)
    }

    /// Grade of `course`: `None` when not enrolled, `Some(None)` when ungraded
    #[must_use]
    pub fn grade_of(&self, course: &str) -> Option<Option<Grade>> {
        self.courses.get(course)
    }

    /// Description of what the student is studying
    #[must_use]
    pub fn study(&self) -> String {
        format!("{} is studying {}.", self.person.name(), self.major)
    }

    /// Enroll in `course` with no grade
    ///
    /// Enrolling again in a course the student already takes clears its
    /// grade.
    pub fn enroll(&mut self, course: &str) {
        match self.courses.insert_ungraded(course) {
            Some(Some(previous)) => log::debug!(
                "{} re-enrolled in {course}, cleared grade {previous}",
                self.person.name()
            ),
            Some(None) => log::debug!("{} re-enrolled in {course}", self.person.name()),
            None => log::debug!("{} enrolled in {course}", self.person.name()),
        }
    }

    /// Record `grade` for an enrolled course
    ///
    /// Grades for courses the student is not enrolled in are ignored.
    /// Returns whether the grade was recorded.
    pub fn add_grade(&mut self, course: &str, grade: Grade) -> bool {
        let applied = self.courses.set_grade(course, grade);
        if applied {
            log::debug!("{} graded {grade} in {course}", self.person.name());
        } else {
            log::debug!(
                "Ignoring grade {grade} for {course}: {} is not enrolled",
                self.person.name()
            );
        }
        applied
    }

    /// Grade-point average over graded courses
    #[must_use]
    pub fn gpa(&self) -> Gpa {
        self.scale.gpa(self.courses.grades())
    }

    /// Letter for a grade on this student's scale
    #[must_use]
    pub fn letter_for(&self, grade: Grade) -> LetterGrade {
        self.scale.letter_for(grade)
    }
}

impl PersonLike for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
