//! Request extractors whose rejections use the API error shape

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::common::DirectoryError;

/// JSON body extractor; malformed or mistyped bodies become 400s
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(DirectoryError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; unparseable parameters become 400s
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(DirectoryError))]
pub struct ApiPath<T>(pub T);
