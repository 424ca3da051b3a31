//! Request extractors.

use axum::extract::FromRequest;

use super::ApiError;

/// `Json<T>` whose rejections render as [`ApiError`] instead of plain text.
///
/// Required fields missing from the body or carrying the wrong type are
/// rejected here, before the handler runs.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);
