use axum::extract::FromRequest;
use service_core::error::AppError;

/// `axum::Json` whose rejections render as `AppError` JSON (400).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
