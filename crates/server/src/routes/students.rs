use axum::{extract::State, Json};
use models::{Student, StudentId};
use serde::Serialize;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{AppJson, AppPath};
use crate::state::ServerState;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student_id: StudentId,
    pub student: Student,
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::StudentResponseDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_student(
    State(state): State<ServerState>,
    AppJson(input): AppJson<Student>,
) -> Json<StudentResponse> {
    let (student_id, student) = state.registry.create_student(input).await;
    info!(student_id, "created student");
    Json(StudentResponse { student_id, student })
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentResponseDoc),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update_student(
    State(state): State<ServerState>,
    AppPath(id): AppPath<StudentId>,
    AppJson(input): AppJson<Student>,
) -> Result<Json<StudentResponse>, JsonApiError> {
    let (student_id, student) = state.registry.update_student(id, input).await?;
    info!(student_id, "updated student");
    Ok(Json(StudentResponse { student_id, student }))
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<ServerState>,
    AppPath(id): AppPath<StudentId>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.registry.delete_student(id).await?;
    info!(student_id = id, "deleted student");
    Ok(Json(MessageResponse::new("Student deleted")))
}
