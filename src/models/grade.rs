//! Grade scale and GPA model
//!
//! This module turns raw course grades into grade points and letter grades,
//! and accumulates grade points into a GPA. The default scale is the usual
//! four-point banding (90/80/70/60); a custom scale can be loaded through
//! [`crate::config::GradebookConfig`].

use crate::error::{GradebookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw course grade, usually in the 0-100 range but never bounds-checked
pub type Grade = i32;

/// Letter grade used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Excellent
    A,
    /// Good
    B,
    /// Satisfactory
    C,
    /// Passing
    D,
    /// Failing
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// One band of a grade scale: every grade `>= min` that did not match a
/// higher band earns `points` and `letter`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Lowest grade in the band (inclusive)
    pub min: Grade,
    /// Grade points awarded for the band
    pub points: f64,
    /// Letter shown for the band
    pub letter: LetterGrade,
}

impl GradeBand {
    /// Create a new band
    #[must_use]
    pub const fn new(min: Grade, points: f64, letter: LetterGrade) -> Self {
        Self {
            min,
            points,
            letter,
        }
    }
}

/// Ordered set of grade bands, highest first
///
/// Grades below every band score `0.0` points and an `F`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeScale {
    bands: Vec<GradeBand>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            bands: vec![
                GradeBand::new(90, 4.0, LetterGrade::A),
                GradeBand::new(80, 3.0, LetterGrade::B),
                GradeBand::new(70, 2.0, LetterGrade::C),
                GradeBand::new(60, 1.0, LetterGrade::D),
            ],
        }
    }
}

impl GradeScale {
    /// Points earned below the lowest band
    pub const FLOOR_POINTS: f64 = 0.0;

    /// Letter given below the lowest band
    pub const FLOOR_LETTER: LetterGrade = LetterGrade::F;

    /// Build a scale from bands, checking that it is well formed
    ///
    /// Bands must be non-empty, strictly descending by `min`, and carry
    /// finite, non-negative points.
    pub fn new(bands: Vec<GradeBand>) -> Result<Self> {
        let scale = Self { bands };
        scale.validate()?;
        Ok(scale)
    }

    /// Check the invariants documented on [`GradeScale::new`]
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(GradebookError::InvalidConfig(
                "grade scale must contain at least one band".to_string(),
            ));
        }

        if let Some(band) = self
            .bands
            .iter()
            .find(|band| !band.points.is_finite() || band.points < 0.0)
        {
            return Err(GradebookError::InvalidConfig(format!(
                "band starting at {} has invalid points {}",
                band.min, band.points
            )));
        }

        if let Some(pair) = self.bands.windows(2).find(|pair| pair[0].min <= pair[1].min) {
            return Err(GradebookError::InvalidConfig(format!(
                "bands must be strictly descending, found {} before {}",
                pair[0].min, pair[1].min
            )));
        }

        Ok(())
    }

    /// The bands of this scale, highest first
    #[must_use]
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    fn band_for(&self, grade: Grade) -> Option<&GradeBand> {
        self.bands.iter().find(|band| grade >= band.min)
    }

    /// Grade points for a raw grade; first matching band wins
    #[must_use]
    pub fn points_for(&self, grade: Grade) -> f64 {
        self.band_for(grade)
            .map_or(Self::FLOOR_POINTS, |band| band.points)
    }

    /// Letter grade for a raw grade
    #[must_use]
    pub fn letter_for(&self, grade: Grade) -> LetterGrade {
        self.band_for(grade)
            .map_or(Self::FLOOR_LETTER, |band| band.letter)
    }

    /// Compute the GPA over a sequence of optional grades
    ///
    /// Ungraded entries (`None`) are skipped entirely; graded entries below
    /// every band still count toward the number of courses.
    pub fn gpa<I>(&self, grades: I) -> Gpa
    where
        I: IntoIterator<Item = Option<Grade>>,
    {
        grades
            .into_iter()
            .flatten()
            .fold(Gpa::empty(), |gpa, grade| gpa.with_points(self.points_for(grade)))
    }
}

/// Letter grade on the default scale
#[must_use]
pub fn letter_grade(grade: Grade) -> LetterGrade {
    GradeScale::default().letter_for(grade)
}

/// Grade-point average over the graded courses
///
/// Always renders as fixed-point text with [`Gpa::decimals`] places, so a
/// student with no graded course shows `0.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa {
    total_points: f64,
    graded_courses: usize,
    decimals: usize,
}

impl Gpa {
    /// Decimal places used unless configured otherwise
    pub const DEFAULT_DECIMALS: usize = 2;

    /// Most decimal places a GPA is rendered with
    pub const MAX_DECIMALS: usize = 20;

    /// A GPA with no graded courses
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_points: 0.0,
            graded_courses: 0,
            decimals: Self::DEFAULT_DECIMALS,
        }
    }

    #[must_use]
    fn with_points(mut self, points: f64) -> Self {
        self.total_points += points;
        self.graded_courses += 1;
        self
    }

    /// Set the number of decimal places used when rendering, capped at
    /// [`Gpa::MAX_DECIMALS`]
    #[must_use]
    pub const fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = if decimals > Self::MAX_DECIMALS {
            Self::MAX_DECIMALS
        } else {
            decimals
        };
        self
    }

    /// Sum of grade points
    #[must_use]
    pub const fn total_points(&self) -> f64 {
        self.total_points
    }

    /// Number of graded courses
    #[must_use]
    pub const fn graded_courses(&self) -> usize {
        self.graded_courses
    }

    /// Decimal places used when rendering
    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.decimals
    }

    /// Whether no course has been graded yet
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.graded_courses == 0
    }

    /// The unrounded average, `0.0` when nothing is graded
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = self.graded_courses as f64;
            self.total_points / count
        }
    }

}

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1075;

/// Render `value` with `decimals` places, rounding its exact binary value
/// and breaking exact ties away from zero
///
/// `{:.N}` alone breaks ties to even (0.125 gives `0.12`), and scaling by a
/// power of ten before rounding moves values that sit just below a tie onto
/// it (0.075 is stored below 0.075 and must give `0.07`).
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (idx, digit) in digits.into_iter().enumerate() {
        if idx == int_len {
            out.push('.');
        }
        out.push(char::from(digit));
    }
    out
}

impl Default for Gpa {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_fixed(self.value(), self.decimals))
    }
}
