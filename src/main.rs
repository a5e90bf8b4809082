mod archive;
mod catalog;
mod config;
mod models;
mod puzzle;
mod routes;
mod utils;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use archive::PuzzleArchive;
use axum::Router;
use config::Config;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub archive: PuzzleArchive,
    /// Process-wide generator; hands each request its own seed so every
    /// puzzle can be regenerated from the seed stored alongside it
    seeds: Mutex<StdRng>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let seeds = match config.puzzle.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            archive: PuzzleArchive::new(config.puzzle.archive_limit),
            seeds: Mutex::new(seeds),
            config,
        }
    }

    pub fn next_seed(&self) -> u64 {
        let mut rng = self.seeds.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puzzle_press=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting puzzle press...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded: {}x{} grids, up to {} words",
        config.puzzle.grid_size,
        config.puzzle.grid_size,
        config.puzzle.num_words
    );
    if let Some(seed) = config.puzzle.seed {
        tracing::info!("Using fixed process seed {}", seed);
    }

    let state = Arc::new(AppState::new(config.clone()));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_process_seed_repeats() {
        let mut config = Config::default();
        config.puzzle.seed = Some(99);
        let a = AppState::new(config.clone());
        let b = AppState::new(config);
        let first: Vec<u64> = (0..3).map(|_| a.next_seed()).collect();
        let second: Vec<u64> = (0..3).map(|_| b.next_seed()).collect();
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }
}
