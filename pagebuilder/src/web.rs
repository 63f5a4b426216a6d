//! Preview and editing server.
//!
//! The server owns the authoritative [`Workspace`] as an `Arc` snapshot
//! behind a lock. Every edit builds a new workspace and swaps the `Arc`, so a
//! request that renders the page always sees one consistent state.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use landing::{LandingPageConfig, SectionConfig, minimal_head, resolve_tokens, trusted};
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::{
    data::Workspace,
    error::{BuildError, Result},
};

/// Shared server state.
pub struct AppState {
    workspace: RwLock<Arc<Workspace>>,
    /// Pre-rendered `<head>` contents for the preview document.
    head: Option<String>,
    /// Write every accepted edit back to disk.
    persist: bool,
}

impl AppState {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: RwLock::new(Arc::new(workspace)),
            head: None,
            persist: false,
        }
    }

    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Current state.
    pub async fn snapshot(&self) -> Arc<Workspace> {
        self.workspace.read().await.clone()
    }

    /// Applies `edit` and swaps the snapshot. With `persist` the new state
    /// is written on the blocking pool before it becomes visible; the write
    /// guard stays held so saves land in edit order.
    async fn replace<F>(&self, edit: F) -> ApiResult<Arc<Workspace>>
    where
        F: FnOnce(&Workspace) -> Result<Workspace>,
    {
        let mut guard = self.workspace.write().await;
        let next = Arc::new(edit(&**guard)?);
        if self.persist {
            let to_save = next.clone();
            tokio::task::spawn_blocking(move || to_save.save())
                .await
                .map_err(|e| {
                    ApiError(StatusCode::INTERNAL_SERVER_ERROR, format!("save task failed: {e}"))
                })??;
        }
        *guard = next.clone();
        Ok(next)
    }
}

struct ApiError(StatusCode, String);

impl From<BuildError> for ApiError {
    fn from(e: BuildError) -> Self {
        let status = match &e {
            BuildError::Landing(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

async fn preview(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let ws = state.snapshot().await;
    let page = ws.compose()?;
    let html = match &state.head {
        Some(head) => page.into_document(trusted(head.clone())),
        None => page.into_document(minimal_head("Preview")),
    };
    Ok(Html(html))
}

async fn get_config(State(state): State<Arc<AppState>>) -> Json<LandingPageConfig> {
    Json(state.snapshot().await.config.clone())
}

async fn put_config(
    State(state): State<Arc<AppState>>,
    Json(config): Json<LandingPageConfig>,
) -> ApiResult<Json<LandingPageConfig>> {
    let ws = state.replace(|ws| ws.with_config(config)).await?;
    info!("configuration replaced");
    Ok(Json(ws.config.clone()))
}

async fn get_sections(State(state): State<Arc<AppState>>) -> Json<Vec<SectionConfig>> {
    Json(state.snapshot().await.sections.clone())
}

async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<SectionConfig>>> {
    if !state.snapshot().await.has_section(&id) {
        return Err(ApiError(StatusCode::NOT_FOUND, format!("unknown section `{id}`")));
    }
    let ws = state.replace(|ws| Ok(ws.toggle(&id))).await?;
    debug!("toggled {id}");
    Ok(Json(ws.sections.clone()))
}

async fn get_tokens(State(state): State<Arc<AppState>>) -> Json<Value> {
    let ws = state.snapshot().await;
    let vars: Map<String, Value> = resolve_tokens(&ws.config.tokens)
        .iter()
        .map(|(k, v)| (format!("--{k}"), Value::String(v.to_string())))
        .collect();
    Json(Value::Object(vars))
}

/// Routes of the preview server.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(preview))
        .route("/api/config", get(get_config).put(put_config))
        .route("/api/sections", get(get_sections))
        .route("/api/sections/{id}/toggle", post(toggle))
        .route("/api/tokens", get(get_tokens))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `state` on `addr` until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BuildError::io(addr.to_string(), e))?;
    info!("preview server listening on http://{addr}");
    axum::serve(listener, router(Arc::new(state)))
        .await
        .map_err(|e| BuildError::io(addr.to_string(), e))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use tower::ServiceExt;

    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(Workspace::starter().unwrap()))
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn put_json(uri: &str, value: &Value) -> Request<Body> {
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_preview_renders_document() {
        let app = router(state());
        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"hero\""));
    }

    #[tokio::test]
    async fn test_toggle_section() {
        let state = state();
        let resp = router(state.clone())
            .oneshot(
                Request::post("/api/sections/pricing/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let sections = body_json(resp).await;
        let pricing = sections
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "pricing")
            .unwrap();
        assert_eq!(pricing["enabled"], false);
        assert_eq!(state.snapshot().await.visibility().get("pricing"), Some(false));

        let resp = router(state)
            .oneshot(
                Request::post("/api/sections/bogus/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_persisted_toggles_keep_every_version() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("landing.json");
        let sections_path = dir.path().join("sections.json");
        let ws = Workspace::starter()
            .unwrap()
            .with_paths(&config_path, Some(sections_path.clone()));
        ws.save().unwrap();

        let state = Arc::new(AppState::new(ws).with_persist(true));
        for _ in 0..2 {
            let resp = router(state.clone())
                .oneshot(
                    Request::post("/api/sections/faq/toggle")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let on_disk = Workspace::load(&config_path, Some(&sections_path)).unwrap();
        assert_eq!(on_disk, *state.snapshot().await);

        let backups: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".bk-"))
            .collect();
        assert_eq!(backups.len(), 2, "{backups:?}");
        assert!(backups.iter().all(|name| name.starts_with("sections.bk-")));
    }

    #[tokio::test]
    async fn test_put_config_missing_required_is_rejected() {
        let state = state();
        let before = state.snapshot().await;

        let mut config = serde_json::to_value(&before.config).unwrap();
        config.as_object_mut().unwrap().remove("hero");
        let resp = router(state.clone())
            .oneshot(put_json("/api/config", &config))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("hero"));
        assert_eq!(*state.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_put_config_replaces_state() {
        let state = state();
        let mut config = serde_json::to_value(&state.snapshot().await.config).unwrap();
        config["hero"]["headline"] = json!("Brand new");

        let resp = router(state.clone())
            .oneshot(put_json("/api/config", &config))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = router(state)
            .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["hero"]["headline"], "Brand new");
    }

    #[tokio::test]
    async fn test_tokens_endpoint() {
        let resp = router(state())
            .oneshot(Request::get("/api/tokens").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let tokens = body_json(resp).await;
        let tokens = tokens.as_object().unwrap();
        assert_eq!(tokens.len(), 18);
        assert_eq!(tokens["--color-primary"], "#6366f1");
    }
}
