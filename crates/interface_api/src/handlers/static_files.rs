//! Static asset handler
//!
//! Serves the intake page from the configured public directory. The root
//! path maps to `index.html`. Resolution canonicalizes the candidate path
//! and rejects with 403 anything that lands outside the canonicalized root;
//! misses are plain-text 404s. No caching headers, no range requests, no
//! directory listings.

use std::path::Path;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::AppState;

/// Serves a file from the public directory
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    match resolve(Path::new(&state.config.public_dir), uri.path()).await {
        Resolution::File {
            bytes,
            content_type,
        } => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Resolution::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
        Resolution::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

enum Resolution {
    File {
        bytes: Vec<u8>,
        content_type: &'static str,
    },
    Forbidden,
    NotFound,
}

/// Resolves a request path under the public root
async fn resolve(public_dir: &Path, path: &str) -> Resolution {
    let relative = path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        "index.html"
    } else {
        relative
    };

    let root = match tokio::fs::canonicalize(public_dir).await {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!(
                dir = %public_dir.display(),
                "public directory not accessible: {e}"
            );
            return Resolution::NotFound;
        }
    };

    // Canonicalize the candidate so `..` segments and symlinks are resolved
    // before the containment check.
    let Ok(candidate) = tokio::fs::canonicalize(root.join(relative)).await else {
        return Resolution::NotFound;
    };
    if !candidate.starts_with(&root) {
        tracing::warn!(path = %path, "path traversal attempt blocked");
        return Resolution::Forbidden;
    }

    match tokio::fs::read(&candidate).await {
        // Directories fail the read and fall out as 404.
        Ok(bytes) => Resolution::File {
            bytes,
            content_type: content_type_for(&candidate),
        },
        Err(_) => Resolution::NotFound,
    }
}

/// Content type from the file extension; unknown extensions are generic binary
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
