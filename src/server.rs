//! Static file responder
//!
//! Serves the built page for local hosting. Routing is deliberately small:
//! the request path maps to a file under the root directory with a content
//! type inferred from its extension; anything missing or not a file falls
//! back to the root document with a 200, and a failed disk read surfaces
//! as a 500 with a plain-text body.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

/// Default listen port; override with the `PORT` environment variable
pub const DEFAULT_PORT: u16 = 4173;

/// Content types for the extensions the page actually ships
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Map a request path to a file under `root`. `/`, missing files, non-file
/// paths, and anything trying to walk out of the root all fall back to the
/// root `index.html`.
pub fn resolve(root: &Path, uri_path: &str) -> PathBuf {
    let mut candidate = root.to_path_buf();
    for component in Path::new(uri_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => candidate.push(part),
            // ".." and friends never escape the root
            _ => return root.join("index.html"),
        }
    }

    if candidate.is_file() {
        candidate
    } else {
        root.join("index.html")
    }
}

/// Listen port from the environment, falling back to the default
pub fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

async fn respond(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let path = resolve(&root, uri.path());
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(err) => {
            log::error!("failed to read {}: {err}", path.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to read file").into_response()
        }
    }
}

/// Serve `root` until the process is stopped
pub async fn serve(root: PathBuf, port: u16) -> std::io::Result<()> {
    let app = Router::new()
        .fallback(get(respond))
        .with_state(Arc::new(root.clone()));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!(
        "serving {} on http://localhost:{port}",
        root.display()
    );
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("rope-hop-test-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            content_type_for(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type_for(Path::new("pkg/app.wasm")), "application/wasm");
        assert_eq!(content_type_for(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(
            content_type_for(Path::new("mystery.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("no-extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_resolve_existing_file() {
        let root = temp_root("resolve");
        fs::write(root.join("app.js"), "console.log('hi')").unwrap();
        assert_eq!(resolve(&root, "/app.js"), root.join("app.js"));
    }

    #[test]
    fn test_resolve_falls_back_to_index() {
        let root = temp_root("fallback");
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        assert_eq!(resolve(&root, "/"), root.join("index.html"));
        assert_eq!(resolve(&root, "/missing.css"), root.join("index.html"));
        // directories are not files
        fs::create_dir_all(root.join("assets")).unwrap();
        assert_eq!(resolve(&root, "/assets"), root.join("index.html"));
    }

    #[test]
    fn test_resolve_rejects_parent_traversal() {
        let root = temp_root("traversal");
        assert_eq!(resolve(&root, "/../secret.txt"), root.join("index.html"));
    }

    #[tokio::test]
    async fn test_respond_serves_file_with_content_type() {
        let root = temp_root("respond");
        fs::write(root.join("style.css"), "body{}").unwrap();

        let response = respond(
            State(Arc::new(root)),
            Uri::from_static("/style.css"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_respond_missing_index_is_500() {
        // No index.html at all: the fallback read fails and surfaces as 500
        let root = temp_root("no-index");
        let response = respond(State(Arc::new(root)), Uri::from_static("/nope")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
