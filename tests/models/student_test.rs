#[cfg(test)]
mod tests {
    use gradebook::models::{Person, PersonLike, Student};

    /// Create a test student
    fn create_test_student() -> Student {
        Student::new("Marie", 24, "Chemistry")
    }

    #[test]
    fn test_student_creation() {
        let student = create_test_student();
        assert_eq!(student.major(), "Chemistry");
        assert!(student.courses().is_empty());
        assert_eq!(student.study(), "Marie is studying Chemistry.");
    }

    #[test]
    fn test_from_person() {
        let student = Student::from_person(Person::new("Pierre", 30), "Physics");
        assert_eq!(student.study(), "Pierre is studying Physics.");
        assert_eq!(student.person().age(), 30);
    }

    #[test]
    fn test_enroll_starts_ungraded() {
        let mut student = create_test_student();
        for course in ["Organic Chemistry", "Calculus", "", "Lab 1"] {
            student.enroll(course);
            assert!(student.is_enrolled(course));
            assert_eq!(student.grade_of(course), Some(None));
        }
        assert_eq!(student.courses().len(), 4);
    }

    #[test]
    fn test_grade_for_unenrolled_course_is_ignored() {
        let mut student = create_test_student();
        student.enroll("Calculus");
        let before = student.courses().clone();

        assert!(!student.add_grade("Biology", 90));

        assert_eq!(student.courses(), &before);
        assert!(!student.is_enrolled("Biology"));
        assert_eq!(student.grade_of("Biology"), None);
    }

    #[test]
    fn test_grade_is_stored_exactly() {
        let mut student = create_test_student();
        student.enroll("Calculus");

        for grade in [0, 59, 90, 100, -15, 250, i32::MIN, i32::MAX] {
            assert!(student.add_grade("Calculus", grade));
            assert_eq!(student.grade_of("Calculus"), Some(Some(grade)));
        }
    }

    #[test]
    fn test_reenroll_resets_grade() {
        let mut student = create_test_student();
        student.enroll("Calculus");
        student.add_grade("Calculus", 97);
        assert_eq!(student.gpa().to_string(), "4.00");

        student.enroll("Calculus");

        assert_eq!(student.grade_of("Calculus"), Some(None));
        assert_eq!(student.courses().len(), 1);
        assert_eq!(student.gpa().to_string(), "0.00");
    }

    #[test]
    fn test_courses_keep_enrollment_order() {
        let mut student = create_test_student();
        for course in ["Zoology", "Art", "Music"] {
            student.enroll(course);
        }
        student.add_grade("Art", 71);
        student.enroll("Zoology");

        let names: Vec<&str> = student.courses().names().collect();
        assert_eq!(names, vec!["Zoology", "Art", "Music"]);

        let graded: Vec<&str> = student
            .courses()
            .iter()
            .filter(|entry| entry.is_graded())
            .map(|entry| entry.course.as_str())
            .collect();
        assert_eq!(graded, vec!["Art"]);
    }

    #[test]
    fn test_student_serde_roundtrip_keeps_courses() {
        let mut student = create_test_student();
        student.enroll("Calculus");
        student.add_grade("Calculus", 82);
        student.enroll("Optics");

        let json = serde_json::to_string(&student).unwrap();
        let restored: Student = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, student);
        assert_eq!(restored.gpa().to_string(), "3.00");
    }

    #[test]
    fn test_negative_age_cannot_be_deserialized() {
        let json = r#"{"person":{"name":"X","age":-1},"major":"Y","courses":[]}"#;
        assert!(serde_json::from_str::<Student>(json).is_err());
    }

    #[test]
    fn test_duplicate_course_cannot_be_deserialized() {
        let json = r#"{
            "person": {"name": "X", "age": 20},
            "major": "Y",
            "courses": [
                {"course": "Math", "grade": 90},
                {"course": "Math", "grade": 50}
            ]
        }"#;
        let err = serde_json::from_str::<Student>(json).unwrap_err();
        assert!(err.to_string().contains("Math"));
    }
}
