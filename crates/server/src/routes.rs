pub mod students;
pub mod classes;

use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics::encode_metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

/// Build the full application router: registry routes, health, metrics and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes (health + metrics + docs)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // 路径参数统一命名为 :id，避免同一位置参数名冲突
    let students = Router::new()
        .route("/students", post(students::create_student))
        .route("/students/:id", put(students::update_student).delete(students::delete_student));

    let classes = Router::new()
        .route("/classes", post(classes::create_class))
        .route("/classes/:id", put(classes::update_class).delete(classes::delete_class))
        .route("/classes/:id/students", get(classes::list_students_in_class))
        .route("/classes/:id/students/:student_id", post(classes::register_student));

    // Compose
    public
        .merge(students)
        .merge(classes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
