use std::sync::Arc;

use axum::{
    Router,
    response::Html,
    routing::get,
};

use bmi_cell::router::bmi_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/bmi", bmi_routes(state))
}

// Single-page form; talks to POST /bmi/calculate.
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
