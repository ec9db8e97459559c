#[cfg(test)]
mod tests {
    use gradebook::models::{Person, PersonLike, Student};
    use log::{Level, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Logger keeping each thread's records apart so parallel tests don't mix
    struct CapturingLogger;

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()));
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;
    static INIT: Once = Once::new();

    /// Install the capturing logger and clear this thread's records
    fn capture_logs() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger installed");
            log::set_max_level(log::LevelFilter::Trace);
        });
        RECORDS.with(|records| records.borrow_mut().clear());
    }

    /// Warnings logged on this thread since `capture_logs`
    fn captured_warnings() -> Vec<String> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Warn)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    /// Create a test person
    fn create_test_person() -> Person {
        Person::new("Grace Hopper", 30)
    }

    #[test]
    fn test_person_creation() {
        let person = create_test_person();
        assert_eq!(person.name(), "Grace Hopper");
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn test_non_negative_ages_are_stored() {
        let mut person = create_test_person();
        for age in [0_i64, 1, 17, 30, 65, 120, i64::from(u32::MAX)] {
            assert!(person.set_age(age));
            assert_eq!(i64::from(person.age()), age);
        }
    }

    #[test]
    fn test_negative_ages_are_rejected() {
        let mut person = create_test_person();
        for age in [-1_i64, -30, i64::MIN] {
            assert!(!person.set_age(age));
            assert_eq!(person.age(), 30);
        }
    }

    #[test]
    fn test_negative_age_logs_diagnostic() {
        capture_logs();
        let mut person = create_test_person();

        person.set_age(-1);

        assert_eq!(captured_warnings(), vec![Person::NEGATIVE_AGE_MESSAGE]);
        assert_eq!(Person::NEGATIVE_AGE_MESSAGE, "Age cannot be negative.");
    }

    #[test]
    fn test_rejections_share_one_format() {
        capture_logs();
        let mut person = create_test_person();

        person.set_age(-7);
        person.set_age(i64::from(u32::MAX) + 1);

        assert_eq!(
            captured_warnings(),
            vec![Person::NEGATIVE_AGE_MESSAGE, Person::AGE_OUT_OF_RANGE_MESSAGE]
        );
    }

    #[test]
    fn test_accepted_age_logs_nothing() {
        capture_logs();
        let mut person = create_test_person();

        person.set_age(31);

        assert!(captured_warnings().is_empty());
    }

    #[test]
    fn test_greet() {
        let person = create_test_person();
        assert_eq!(
            person.greet(),
            "Hello, my name is Grace Hopper and I am 30 years old."
        );
    }

    #[test]
    fn test_have_birthday() {
        let mut person = Person::new("Newborn", 0);
        person.have_birthday();
        assert_eq!(person.age(), 1);

        for expected in 2..=10 {
            person.have_birthday();
            assert_eq!(person.age(), expected);
        }
        assert_eq!(person.greet(), "Hello, my name is Newborn and I am 10 years old.");
    }

    #[test]
    fn test_student_shares_person_behavior() {
        let mut student = Student::new("Alan", 21, "Mathematics");

        assert_eq!(student.name(), "Alan");
        assert!(!student.set_age(-5));
        assert_eq!(student.age(), 21);

        student.have_birthday();
        assert_eq!(student.age(), 22);
        assert_eq!(student.greet(), "Hello, my name is Alan and I am 22 years old.");
        assert_eq!(student.person().name(), "Alan");
    }

    #[test]
    fn test_person_like_is_uniform() {
        fn older<P: PersonLike>(mut entity: P) -> u32 {
            entity.have_birthday();
            entity.age()
        }

        assert_eq!(older(create_test_person()), 31);
        assert_eq!(older(Student::new("Emmy", 19, "Algebra")), 20);
    }
}
