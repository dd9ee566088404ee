//! Request extractors with unified error responses
//!
//! Wrappers around axum's `Json` and `Query` whose rejections convert into
//! [`ApiError`], so malformed bodies and unknown query keys produce the same
//! `{error, code}` shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
