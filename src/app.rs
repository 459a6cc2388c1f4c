use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/points", post(handlers::submit_point))
        .route("/heatmap.svg", get(handlers::heatmap_svg))
        .route("/api/points", get(handlers::list_points).post(handlers::add_point))
        .route("/api/grid", get(handlers::get_grid))
        .route("/api/tooltip", get(handlers::get_tooltip))
        .route("/api/cell", get(handlers::get_cell))
        .with_state(state)
}
