pub mod health;
pub mod puzzles;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/themes", get(puzzles::list_themes))
        .route("/puzzles", axum::routing::post(puzzles::generate_puzzle))
        .route("/puzzles/{id}", get(puzzles::get_puzzle))
        .route("/puzzles/{id}/solution", get(puzzles::get_solution))
}
