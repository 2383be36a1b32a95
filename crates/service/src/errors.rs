use models::{ClassId, StudentId};
use thiserror::Error;

/// Every variant is a reference to an id the registry does not hold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Student not found")]
    StudentNotFound(StudentId),
    #[error("Class not found")]
    ClassNotFound(ClassId),
    #[error("Class or student not found")]
    EnrollmentNotFound { class_id: ClassId, student_id: StudentId },
}
