//! Course catalog offered by the enrollment form.
//!
//! The store does not restrict `course` to this list; it only drives the
//! choices a front end presents and the preselected entry on edit.

/// Courses offered at enrollment, in presentation order.
pub const COURSES: &[&str] = &[
    "Python Programming",
    "Web Development",
    "Data Science",
    "Machine Learning",
    "Database Design",
    "Mobile App Development",
];

/// Returns the position of `course` in [`COURSES`], if offered.
///
/// Linear scan, exact match.
pub fn course_position(course: &str) -> Option<usize> {
    COURSES.iter().position(|candidate| *candidate == course)
}
