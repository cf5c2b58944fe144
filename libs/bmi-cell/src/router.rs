use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn bmi_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/calculate", post(handlers::calculate_bmi))
        .with_state(state)
}
