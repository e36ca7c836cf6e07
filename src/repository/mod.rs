use axum::{
    http::{header::CONTENT_TYPE, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::error::RepositoryError;
use crate::pages::{CONTENT_TYPE_HTML, INDEX_HTML};
use crate::{resolver, router};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .fallback(serve_artifact)
}

/// GET / and /index.html
async fn index() -> impl IntoResponse {
    ([(CONTENT_TYPE, CONTENT_TYPE_HTML)], INDEX_HTML)
}

/// Any other path: jar, pom, their checksums, or the 404 page
async fn serve_artifact(uri: Uri) -> Result<Response, RepositoryError> {
    let path = uri.path();
    let request = router::classify(path);

    let payload = resolver::resolve(&request)
        .ok_or_else(|| RepositoryError::NotFound(path.to_string()))?;

    debug!(?request, content_type = payload.content_type, "Serving synthetic artifact");
    Ok(([(CONTENT_TYPE, payload.content_type)], payload.bytes).into_response())
}
