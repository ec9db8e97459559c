//! Trait definitions for domain models
//!
//! A [`Student`](crate::models::Student) embeds a [`Person`] rather than
//! inheriting from it; `PersonLike` exposes the embedded person's behavior on
//! both types so callers can treat them uniformly.

use crate::models::person::{Age, Person};

/// Shared behavior of every entity that is a person.
pub trait PersonLike {
    /// The underlying Person
    fn person(&self) -> &Person;

    /// Mutable access to the underlying Person
    fn person_mut(&mut self) -> &mut Person;

    /// The person's name
    fn name(&self) -> &str {
        self.person().name()
    }

    /// The person's current age
    fn age(&self) -> Age {
        self.person().age()
    }

    /// Set the age through the person's validation
    fn set_age(&mut self, age: i64) -> bool {
        self.person_mut().set_age(age)
    }

    /// Greeting line introducing the person
    fn greet(&self) -> String {
        self.person().greet()
    }

    /// Increase the age by one year
    fn have_birthday(&mut self) {
        self.person_mut().have_birthday();
    }
}
