use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::RepositoryError;

/// Reject every method other than GET with 400
pub async fn get_only(request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        return RepositoryError::MethodNotSupported(request.method().clone()).into_response();
    }

    next.run(request).await
}

/// Log `<status> <path>` for every answered request
pub async fn access_log(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    let response = next.run(request).await;

    info!("{} {}", response.status().as_u16(), uri);
    response
}
