use axum::{middleware::from_fn, response::IntoResponse, routing::get, Json, Router};
use clap::Parser;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod middleware;
mod models;
mod pages;
mod repository;
mod resolver;
mod router;

use models::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listener = TcpListener::bind(config.addr).await?;
    info!("listening on {}", config.addr);

    axum::serve(listener, app()).await?;

    Ok(())
}

fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(repository::routes())
        .layer(from_fn(middleware::get_only))
        .layer(from_fn(middleware::access_log))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use crate::models::ChecksumKind;
    use crate::resolver::{checksum, EMPTY_JAR};

    const EMPTY_JAR_SHA1: &str = "033033564082b7c443afef83ef8b0be6d24ef419";

    async fn get(uri: &str) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    fn content_type(response: &Response) -> &str {
        response.headers()[CONTENT_TYPE].to_str().unwrap()
    }

    fn artifact_path(group: &str, artifact: &str, ext: &str) -> String {
        format!(
            "/mvn2/{}/{}/99.0-does-not-exist/{}-99.0-does-not-exist.{}",
            group, artifact, artifact, ext
        )
    }

    #[tokio::test]
    async fn test_jar_is_empty_jar_for_any_coordinate() {
        for (group, artifact) in [
            ("commons-logging", "commons-logging"),
            ("org/apache/commons", "commons-lang3"),
            ("log4j", "log4j"),
        ] {
            let response = get(&artifact_path(group, artifact, "jar")).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(content_type(&response), "application/java-archive");
            assert_eq!(body_bytes(response).await, EMPTY_JAR.to_vec());
        }
    }

    #[tokio::test]
    async fn test_jar_sha1_end_to_end() {
        let response = get("/mvn2/commons-logging/commons-logging/99.0-does-not-exist/commons-logging-99.0-does-not-exist.jar.sha1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/plain");
        assert_eq!(body_bytes(response).await, EMPTY_JAR_SHA1.as_bytes());
    }

    #[tokio::test]
    async fn test_pom_end_to_end() {
        let response = get("/mvn2/foo/bar/99.0-does-not-exist/bar-99.0-does-not-exist.pom").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/xml");

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("<groupId>foo</groupId><artifactId>bar</artifactId>"));
    }

    #[tokio::test]
    async fn test_pom_nested_group_uses_dots() {
        let response = get(&artifact_path("org/apache/commons", "commons-lang3", "pom")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("<groupId>org.apache.commons</groupId>"));
        assert!(body.contains("<artifactId>commons-lang3</artifactId>"));
    }

    #[tokio::test]
    async fn test_checksums_digest_unsuffixed_body() {
        for (group, artifact, ext) in [
            ("commons-logging", "commons-logging", "jar"),
            ("foo", "bar", "pom"),
            ("org/slf4j", "slf4j-api", "pom"),
        ] {
            let path = artifact_path(group, artifact, ext);
            let raw = body_bytes(get(&path).await).await;

            for (suffix, kind) in [("sha1", ChecksumKind::Sha1), ("md5", ChecksumKind::Md5)] {
                let response = get(&format!("{}.{}", path, suffix)).await;
                assert_eq!(response.status(), StatusCode::OK);
                assert_eq!(content_type(&response), "text/plain");
                assert_eq!(
                    body_bytes(response).await,
                    checksum(&raw, kind).unwrap().into_bytes(),
                    "{}.{}",
                    path,
                    suffix
                );
            }
        }
    }

    #[tokio::test]
    async fn test_artifact_mismatch_is_not_found() {
        let response = get("/mvn2/g/a/99.0-does-not-exist/b-99.0-does-not-exist.jar").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&response), "text/html");
    }

    #[tokio::test]
    async fn test_unknown_suffix_is_not_found() {
        let response = get("/mvn2/g/a/99.0-does-not-exist/a-99.0-does-not-exist.jar.sha256").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("Not Found: /mvn2/g/a/99.0-does-not-exist/a-99.0-does-not-exist.jar.sha256"));
    }

    #[tokio::test]
    async fn test_index_page() {
        for uri in ["/", "/index.html"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(content_type(&response), "text/html");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_non_get_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri(artifact_path("g", "a", "jar"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
