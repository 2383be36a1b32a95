//! Extractors whose rejections are reported as `JsonApiError` (422).

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

/// `axum::Json` with a 422 JSON rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with a 422 JSON rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct AppPath<T>(pub T);
