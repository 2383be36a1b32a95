use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use common::metrics;
use models::{Class, ClassId, Student, StudentId};
use tokio::sync::RwLock;
use tracing::debug;

use super::{Registration, RegistryStore};
use crate::errors::RegistryError;

/// Students, classes and their rosters under a single lock.
///
/// Ids come from per-kind counters that only ever grow, so an id is never
/// handed out twice even after deletions.
#[derive(Debug)]
struct RegistryState {
    students: HashMap<StudentId, Student>,
    classes: HashMap<ClassId, Class>,
    enrollment: HashMap<ClassId, Vec<StudentId>>,
    next_student_id: StudentId,
    next_class_id: ClassId,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            students: HashMap::new(),
            classes: HashMap::new(),
            enrollment: HashMap::new(),
            next_student_id: 1,
            next_class_id: 1,
        }
    }
}

/// 进程内注册表：所有状态仅在进程生命周期内有效
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<RegistryState>>,
}

impl InMemoryRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 创建学生，分配自增 id
    pub async fn create_student(&self, student: Student) -> (StudentId, Student) {
        let mut state = self.inner.write().await;
        let id = state.next_student_id;
        state.next_student_id += 1;
        state.students.insert(id, student.clone());
        drop(state);
        debug!(event = "student_created", student_id = id);
        metrics::record_operation("create_student");
        (id, student)
    }

    /// 整体替换学生记录
    pub async fn update_student(&self, id: StudentId, student: Student) -> Result<(StudentId, Student), RegistryError> {
        let mut state = self.inner.write().await;
        let existed = state.students.get_mut(&id).ok_or_else(|| not_found(RegistryError::StudentNotFound(id)))?;
        *existed = student.clone();
        drop(state);
        debug!(event = "student_updated", student_id = id);
        metrics::record_operation("update_student");
        Ok((id, student))
    }

    /// 删除学生，并从所有课程名单中移除
    pub async fn delete_student(&self, id: StudentId) -> Result<(), RegistryError> {
        let mut state = self.inner.write().await;
        if state.students.remove(&id).is_none() {
            return Err(not_found(RegistryError::StudentNotFound(id)));
        }
        let mut dropped = 0usize;
        for roster in state.enrollment.values_mut() {
            let before = roster.len();
            roster.retain(|sid| *sid != id);
            dropped += before - roster.len();
        }
        drop(state);
        debug!(event = "student_deleted", student_id = id, enrollments_dropped = dropped);
        metrics::record_operation("delete_student");
        Ok(())
    }

    #[cfg(test)]
    async fn get_student(&self, id: StudentId) -> Option<Student> {
        let state = self.inner.read().await;
        state.students.get(&id).cloned()
    }

    /// 创建课程，同时初始化空名单
    pub async fn create_class(&self, class: Class) -> (ClassId, Class) {
        let mut state = self.inner.write().await;
        let id = state.next_class_id;
        state.next_class_id += 1;
        state.classes.insert(id, class.clone());
        state.enrollment.insert(id, Vec::new());
        drop(state);
        debug!(event = "class_created", class_id = id);
        metrics::record_operation("create_class");
        (id, class)
    }

    /// 整体替换课程记录；名单保持不变
    pub async fn update_class(&self, id: ClassId, class: Class) -> Result<(ClassId, Class), RegistryError> {
        let mut state = self.inner.write().await;
        let existed = state.classes.get_mut(&id).ok_or_else(|| not_found(RegistryError::ClassNotFound(id)))?;
        *existed = class.clone();
        drop(state);
        debug!(event = "class_updated", class_id = id);
        metrics::record_operation("update_class");
        Ok((id, class))
    }

    /// 删除课程及其名单
    pub async fn delete_class(&self, id: ClassId) -> Result<(), RegistryError> {
        let mut state = self.inner.write().await;
        if state.classes.remove(&id).is_none() {
            return Err(not_found(RegistryError::ClassNotFound(id)));
        }
        state.enrollment.remove(&id);
        drop(state);
        debug!(event = "class_deleted", class_id = id);
        metrics::record_operation("delete_class");
        Ok(())
    }

    #[cfg(test)]
    async fn get_class(&self, id: ClassId) -> Option<Class> {
        let state = self.inner.read().await;
        state.classes.get(&id).cloned()
    }

    /// 将学生追加到课程名单；重复注册会再次追加
    pub async fn register_student(&self, class_id: ClassId, student_id: StudentId) -> Result<Registration, RegistryError> {
        let mut state = self.inner.write().await;
        if !state.students.contains_key(&student_id) {
            return Err(not_found(RegistryError::EnrollmentNotFound { class_id, student_id }));
        }
        let roster = state
            .enrollment
            .get_mut(&class_id)
            .ok_or_else(|| not_found(RegistryError::EnrollmentNotFound { class_id, student_id }))?;
        roster.push(student_id);
        drop(state);
        debug!(event = "student_registered", class_id, student_id);
        metrics::record_operation("register_student");
        Ok(Registration { class_id, student_id })
    }

    /// 按注册顺序返回课程名单中的学生
    pub async fn list_students_in_class(&self, class_id: ClassId) -> Result<Vec<Student>, RegistryError> {
        let state = self.inner.read().await;
        let roster = state
            .enrollment
            .get(&class_id)
            .ok_or_else(|| not_found(RegistryError::ClassNotFound(class_id)))?;
        // 已不存在的学生 id 直接跳过
        let students = roster
            .iter()
            .filter_map(|sid| state.students.get(sid).cloned())
            .collect::<Vec<_>>();
        drop(state);
        metrics::record_operation("list_students_in_class");
        Ok(students)
    }
}

fn not_found(err: RegistryError) -> RegistryError {
    debug!(event = "not_found", error = %err);
    metrics::record_not_found();
    err
}

#[async_trait]
impl RegistryStore for InMemoryRegistry {
    async fn create_student(&self, student: Student) -> (StudentId, Student) { self.create_student(student).await }
    async fn update_student(&self, id: StudentId, student: Student) -> Result<(StudentId, Student), RegistryError> { self.update_student(id, student).await }
    async fn delete_student(&self, id: StudentId) -> Result<(), RegistryError> { self.delete_student(id).await }
    async fn create_class(&self, class: Class) -> (ClassId, Class) { self.create_class(class).await }
    async fn update_class(&self, id: ClassId, class: Class) -> Result<(ClassId, Class), RegistryError> { self.update_class(id, class).await }
    async fn delete_class(&self, id: ClassId) -> Result<(), RegistryError> { self.delete_class(id).await }
    async fn register_student(&self, class_id: ClassId, student_id: StudentId) -> Result<Registration, RegistryError> { self.register_student(class_id, student_id).await }
    async fn list_students_in_class(&self, class_id: ClassId) -> Result<Vec<Student>, RegistryError> { self.list_students_in_class(class_id).await }
}
