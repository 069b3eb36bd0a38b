//! Cache revalidation for read endpoints.
//!
//! Every mutation bumps the generation of the paths whose content it
//! changed. GET responses carry a weak `ETag` built from that generation, so
//! a client sending `If-None-Match` gets `304 Not Modified` until the next
//! revalidation of the path.
//!
//! Paths are keyed by their first segment (`/properties/{id}/neighbors` is
//! `/properties`). Aggregates (`/summary`, `/budget/...`) read from several
//! tables and are keyed by the root `/`, which every revalidation bumps.

use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
};

use axum::{
    Extension,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{ETag, HeaderMapExt, IfNoneMatch},
};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::server::ServerState;

/// Key shared by every aggregate view.
pub const ROOT: &str = "/";

/// Registry of per-path generations.
#[derive(Debug)]
pub struct Revalidator {
    /// Distinguishes tags issued by different server processes.
    epoch: i64,
    generations: RwLock<HashMap<String, u64>>,
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidator {
    pub fn new() -> Self {
        Self {
            epoch: Utc::now().timestamp_millis(),
            generations: RwLock::new(HashMap::new()),
        }
    }

    /// Mark `path` (and every aggregate) as changed.
    pub async fn revalidate_path(&self, path: &str) {
        let key = cache_key(path);
        let mut generations = self.generations.write().await;
        let generation = generations.entry(key.to_string()).or_insert(0);
        *generation += 1;
        tracing::debug!("revalidated {key} (generation {generation})");
        if key != ROOT {
            *generations.entry(ROOT.to_string()).or_insert(0) += 1;
        }
    }

    pub async fn revalidate_paths(&self, paths: &[&str]) {
        for path in paths {
            self.revalidate_path(path).await;
        }
    }

    pub async fn generation(&self, path: &str) -> u64 {
        self.generations
            .read()
            .await
            .get(cache_key(path))
            .copied()
            .unwrap_or(0)
    }

    /// Weak tag for `path` as seen by `username`.
    pub async fn etag(&self, path: &str, username: &str) -> Option<ETag> {
        let generation = self.generation(path).await;
        let mut hasher = DefaultHasher::new();
        username.hash(&mut hasher);
        let tag = format!(
            "W/\"{:x}-{:x}-{generation}\"",
            self.epoch,
            hasher.finish()
        );
        match tag.parse() {
            Ok(etag) => Some(etag),
            Err(err) => {
                tracing::error!("failed to build etag {tag}: {err:?}");
                None
            }
        }
    }
}

/// Revalidation key for a request path.
pub fn cache_key(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    let segment_end = trimmed.find('/').unwrap_or(trimmed.len());
    let segment = &trimmed[..segment_end];
    match segment {
        "" | "summary" | "budget" => ROOT,
        _ => &path[..path.len() - trimmed.len() + segment_end],
    }
}

/// Middleware answering conditional GETs.
pub async fn conditional_get(
    State(state): State<ServerState>,
    Extension(user): Extension<engine::users::Model>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    let Some(etag) = state.revalidator.etag(&path, &user.username).await else {
        return next.run(request).await;
    };

    if let Some(TypedHeader(if_none_match)) = if_none_match
        && !if_none_match.precondition_passes(&etag)
    {
        return (StatusCode::NOT_MODIFIED, TypedHeader(etag)).into_response();
    }

    let mut response = next.run(request).await;
    if response.status().is_success() {
        response.headers_mut().typed_insert(etag);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_uses_first_segment() {
        assert_eq!(cache_key("/properties"), "/properties");
        assert_eq!(cache_key("/properties/abc/neighbors"), "/properties");
        assert_eq!(cache_key("/documents/"), "/documents");
        assert_eq!(cache_key("/summary"), ROOT);
        assert_eq!(cache_key("/budget/report"), ROOT);
        assert_eq!(cache_key("/"), ROOT);
    }

    #[tokio::test]
    async fn revalidation_bumps_path_and_root() {
        let revalidator = Revalidator::new();
        assert_eq!(revalidator.generation("/documents").await, 0);

        revalidator.revalidate_path("/documents").await;
        revalidator.revalidate_path("/documents/123").await;

        assert_eq!(revalidator.generation("/documents").await, 2);
        assert_eq!(revalidator.generation("/summary").await, 2);
        assert_eq!(revalidator.generation("/properties").await, 0);
    }

    #[tokio::test]
    async fn etag_changes_after_revalidation() {
        let revalidator = Revalidator::new();
        let before = revalidator.etag("/tenants", "alice").await.unwrap();
        assert_eq!(
            revalidator.etag("/tenants/1", "alice").await.unwrap(),
            before
        );
        assert_ne!(revalidator.etag("/tenants", "bob").await.unwrap(), before);

        revalidator.revalidate_path("/tenants").await;
        assert_ne!(revalidator.etag("/tenants", "alice").await.unwrap(), before);
    }
}
