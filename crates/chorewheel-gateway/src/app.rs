use axum::{
    routing::{get, post},
    Router,
};
use chorewheel_core::ChorewheelConfig;
use chorewheel_rotation::RotationManager;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: ChorewheelConfig,
    pub rotation: RotationManager,
}

impl AppState {
    pub fn new(config: ChorewheelConfig, rotation: RotationManager) -> Self {
        Self { config, rotation }
    }
}

/// Assemble the full Axum router.
///
/// All routes are CORS-open — the tracker page is a static file that may be
/// served from any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route(
            "/{tracker}/state",
            get(crate::http::trackers::state_handler),
        )
        .route(
            "/{tracker}/mark-done",
            post(crate::http::trackers::mark_done_handler),
        )
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
