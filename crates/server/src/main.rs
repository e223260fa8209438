use std::{io::ErrorKind, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use catalog::Registry;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{SampleSummary, ViewModel},
};
use site::{load_settings, render_page};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod app_state;

use app_state::AppState;

const RESERVED_SEGMENTS: &[&str] = &["samples", "api"];

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings()?;
    let registry = settings.load_registry()?;
    let context = settings.deployment_context()?;
    anyhow::ensure!(
        context.base_path().starts_with('/'),
        "base path '{}' must start with '/' to be served",
        context.base_path()
    );

    check_artifact_route(&registry)?;

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(
        %addr,
        mode = %settings.mode,
        base_path = context.base_path(),
        samples = registry.len(),
        public_dir = %settings.public_dir.display(),
        "preview server listening"
    );

    let state = AppState {
        registry: Arc::new(registry),
        context,
        public_dir: settings.public_dir,
    };
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Page and API routes live under `samples/` and `api/`; an artifact directory
/// starting with either would produce conflicting routes.
fn check_artifact_route(registry: &Registry) -> anyhow::Result<()> {
    let directory = registry.artifact_rule().directory.trim_matches('/');
    let first_segment = directory.split('/').next().unwrap_or_default();
    if RESERVED_SEGMENTS.contains(&first_segment) {
        anyhow::bail!(
            "artifact directory '{directory}' collides with the '{first_segment}/' routes"
        );
    }
    Ok(())
}

/// Every page and asset route is mounted under the deployment base path, so a
/// link produced by the resolver is also a route of this server.
fn build_router(state: Arc<AppState>) -> Router {
    let base = state.context.base_path().to_string();
    let artifact_dir = state
        .registry
        .artifact_rule()
        .directory
        .trim_matches('/')
        .to_string();
    let artifact_route = if artifact_dir.is_empty() {
        format!("{base}:file_name")
    } else {
        format!("{base}{artifact_dir}/:file_name")
    };

    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route(&base, get(index_page))
        .route(&format!("{base}samples/:sample_id"), get(sample_page))
        .route(&format!("{base}samples/:sample_id/"), get(sample_page))
        .route(&format!("{base}api/samples"), get(list_samples))
        .route(&format!("{base}api/samples/:sample_id"), get(sample_view))
        .route(&artifact_route, get(download_artifact));

    if !state.context.is_root() {
        router = router.route(base.trim_end_matches('/'), get(index_page));
    }

    router.with_state(state).layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let controller = state.controller();
    Html(render_page(&controller, None))
}

async fn sample_page(
    State(state): State<Arc<AppState>>,
    Path(sample_id): Path<String>,
) -> (StatusCode, Html<String>) {
    let mut controller = state.controller();
    match controller.select(&sample_id) {
        Ok(_) => (StatusCode::OK, Html(render_page(&controller, None))),
        Err(error) => (
            StatusCode::NOT_FOUND,
            Html(render_page(&controller, Some(&error.to_string()))),
        ),
    }
}

async fn list_samples(State(state): State<Arc<AppState>>) -> Json<Vec<SampleSummary>> {
    Json(state.registry.summaries())
}

async fn sample_view(
    State(state): State<Arc<AppState>>,
    Path(sample_id): Path<String>,
) -> ApiResult<Json<ViewModel>> {
    let mut controller = state.controller();
    controller
        .select(&sample_id)
        .map_err(|e| (StatusCode::NOT_FOUND, Json(ApiError::from(e))))?;
    Ok(Json(controller.view_model().clone()))
}

async fn download_artifact(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    if file_name.is_empty()
        || file_name.starts_with('.')
        || file_name.contains(['/', '\\'])
        || file_name.contains("..")
    {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                ErrorCode::Validation,
                format!("invalid artifact name '{file_name}'"),
            )),
        ));
    }

    let path = state
        .public_dir
        .join(state.registry.artifact_rule().directory.trim_matches('/'))
        .join(&file_name);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiError::new(
                    ErrorCode::NotFound,
                    format!("artifact '{file_name}' not found"),
                )),
            ));
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read artifact");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "failed to read artifact")),
            ));
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
