pub mod health;
pub mod jobs;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/jobs/:id",
            patch(jobs::handle_update_job).delete(jobs::handle_delete_job),
        )
        .with_state(state)
}
