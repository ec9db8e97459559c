//! Person entity model
//!
//! This module contains the Person entity, the base of the student model.
//! A Person has a fixed name and an age that can only move through a
//! validating setter, so it is never negative.

use crate::models::traits::PersonLike;
use crate::utils::logging::log_warning;
use serde::{Deserialize, Serialize};

/// Age in whole years
pub type Age = u32;

/// Core Person entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name, fixed at construction
    name: String,
    /// Current age
    age: Age,
}

impl Person {
    /// Message logged when a negative age is rejected
    pub const NEGATIVE_AGE_MESSAGE: &'static str = "Age cannot be negative.";

    /// Message logged when an age does not fit in [`Age`]
    pub const AGE_OUT_OF_RANGE_MESSAGE: &'static str = "Age is out of range.";

    /// Create a new Person
    #[must_use]
    pub fn new(name: impl Into<String>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The person's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's current age
    #[must_use]
    pub const fn age(&self) -> Age {
        self.age
    }

    /// Set the age, rejecting negative values
    ///
    /// A rejected value is logged and leaves the stored age unchanged; no
    /// error reaches the caller. Returns whether the new age was applied.
    pub fn set_age(&mut self, age: i64) -> bool {
        if age < 0 {
            log_warning(Self::NEGATIVE_AGE_MESSAGE, None);
            return false;
        }

        match Age::try_from(age) {
            Ok(age) => {
                self.age = age;
                true
            }
            Err(_) => {
                log_warning(Self::AGE_OUT_OF_RANGE_MESSAGE, None);
                false
            }
        }
    }

    /// Greeting line introducing the person
    #[must_use]
    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old.",
            self.name, self.age
        )
    }

    /// Increase the age by one year
    pub fn have_birthday(&mut self) {
        self.set_age(i64::from(self.age) + 1);
    }
}

impl PersonLike for Person {
    fn person(&self) -> &Person {
        self
    }

    fn person_mut(&mut self) -> &mut Person {
        self
    }
}
