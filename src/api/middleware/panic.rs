//! Last-resort handler for panics escaping a request handler.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{ErrorResponse, ServerFailure};

/// Log the panic and answer with the generic internal error body.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// message travels in the response extensions for `report_failures`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Unhandled failure while serving request: {}", detail);

    let mut response =
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response();
    response
        .extensions_mut()
        .insert(ServerFailure(format!("panic: {}", detail)));
    response
}
