use axum::{extract::State, Json};
use models::{Class, ClassId, Student, StudentId};
use serde::Serialize;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{AppJson, AppPath};
use crate::state::ServerState;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub class_id: ClassId,
    pub class: Class,
}

#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
}

#[utoipa::path(
    post, path = "/classes", tag = "classes",
    request_body = crate::openapi::ClassDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ClassResponseDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_class(
    State(state): State<ServerState>,
    AppJson(input): AppJson<Class>,
) -> Json<ClassResponse> {
    let (class_id, class) = state.registry.create_class(input).await;
    info!(class_id, "created class");
    Json(ClassResponse { class_id, class })
}

#[utoipa::path(
    put, path = "/classes/{id}", tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    request_body = crate::openapi::ClassDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClassResponseDoc),
        (status = 404, description = "Class not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update_class(
    State(state): State<ServerState>,
    AppPath(id): AppPath<ClassId>,
    AppJson(input): AppJson<Class>,
) -> Result<Json<ClassResponse>, JsonApiError> {
    let (class_id, class) = state.registry.update_class(id, input).await?;
    info!(class_id, "updated class");
    Ok(Json(ClassResponse { class_id, class }))
}

#[utoipa::path(
    delete, path = "/classes/{id}", tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Class not found")
    )
)]
pub async fn delete_class(
    State(state): State<ServerState>,
    AppPath(id): AppPath<ClassId>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.registry.delete_class(id).await?;
    info!(class_id = id, "deleted class");
    Ok(Json(MessageResponse::new("Class deleted")))
}

#[utoipa::path(
    post, path = "/classes/{id}/students/{student_id}", tag = "classes",
    params(
        ("id" = i64, Path, description = "Class id"),
        ("student_id" = i64, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Registered", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Class or student not found")
    )
)]
pub async fn register_student(
    State(state): State<ServerState>,
    AppPath((class_id, student_id)): AppPath<(ClassId, StudentId)>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let registration = state.registry.register_student(class_id, student_id).await?;
    info!(class_id, student_id, "registered student to class");
    Ok(Json(MessageResponse::new(registration.to_string())))
}

#[utoipa::path(
    get, path = "/classes/{id}/students", tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Roster in registration order", body = crate::openapi::StudentsResponseDoc),
        (status = 404, description = "Class not found")
    )
)]
pub async fn list_students_in_class(
    State(state): State<ServerState>,
    AppPath(class_id): AppPath<ClassId>,
) -> Result<Json<StudentsResponse>, JsonApiError> {
    let students = state.registry.list_students_in_class(class_id).await?;
    info!(class_id, count = students.len(), "list students in class");
    Ok(Json(StudentsResponse { students }))
}
