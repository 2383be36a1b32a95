pub mod store;
pub mod memory;

use std::fmt;

use models::{ClassId, StudentId};

pub use memory::InMemoryRegistry;
pub use store::RegistryStore;

/// Confirmation returned when a student is appended to a class roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    pub class_id: ClassId,
    pub student_id: StudentId,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student {} registered to class {}", self.student_id, self.class_id)
    }
}
