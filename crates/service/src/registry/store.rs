use async_trait::async_trait;
use models::{Class, ClassId, Student, StudentId};

use super::Registration;
use crate::errors::RegistryError;

/// Trait abstraction over the student/class registry used by the HTTP layer.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn create_student(&self, student: Student) -> (StudentId, Student);
    async fn update_student(&self, id: StudentId, student: Student) -> Result<(StudentId, Student), RegistryError>;
    async fn delete_student(&self, id: StudentId) -> Result<(), RegistryError>;

    async fn create_class(&self, class: Class) -> (ClassId, Class);
    async fn update_class(&self, id: ClassId, class: Class) -> Result<(ClassId, Class), RegistryError>;
    async fn delete_class(&self, id: ClassId) -> Result<(), RegistryError>;

    async fn register_student(&self, class_id: ClassId, student_id: StudentId) -> Result<Registration, RegistryError>;
    async fn list_students_in_class(&self, class_id: ClassId) -> Result<Vec<Student>, RegistryError>;
}
