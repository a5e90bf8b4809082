use crate::{
    catalog,
    models::{AnswerKey, PuzzleKind, PuzzleResult},
    puzzle::{PuzzleError, PuzzleGenerator},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub kind: PuzzleKind,
    /// Theme name; picked at random when absent
    #[serde(default)]
    pub theme: Option<String>,
    /// Pin the seed to reproduce an earlier grid
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub grid_size: Option<usize>,
    #[serde(default)]
    pub num_words: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub word_search: Vec<&'static str>,
    pub crossword: Vec<&'static str>,
}

/// List the themes each puzzle kind can draw from
pub async fn list_themes() -> Json<ThemesResponse> {
    Json(ThemesResponse {
        word_search: catalog::theme_names(PuzzleKind::WordSearch),
        crossword: catalog::theme_names(PuzzleKind::Crossword),
    })
}

/// Generate a puzzle and archive it for later solution lookups
pub async fn generate_puzzle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<PuzzleResult>, StatusCode> {
    let generator = PuzzleGenerator::new(
        request.grid_size.unwrap_or(state.config.puzzle.grid_size),
        request.num_words.unwrap_or(state.config.puzzle.num_words),
    )
    .map_err(reject)?;

    let seed = request.seed.unwrap_or_else(|| state.next_seed());
    let puzzle = generator
        .generate(request.kind, request.theme.as_deref(), seed)
        .map_err(reject)?;

    state.archive.insert(puzzle.clone());
    Ok(Json(puzzle))
}

/// Fetch an archived puzzle
pub async fn get_puzzle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PuzzleResult>, StatusCode> {
    state.archive.get(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Fetch the answer key of an archived puzzle
pub async fn get_solution(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnswerKey>, StatusCode> {
    let puzzle = state.archive.get(&id).ok_or_else(|| {
        tracing::warn!("Solution requested for unknown puzzle {}", id);
        StatusCode::NOT_FOUND
    })?;
    Ok(Json(puzzle.answer_key()))
}

fn reject(e: PuzzleError) -> StatusCode {
    tracing::warn!("Rejected puzzle request: {}", e);
    match e {
        PuzzleError::NoThemes => StatusCode::INTERNAL_SERVER_ERROR,
        PuzzleError::UnknownTheme(_)
        | PuzzleError::InvalidGridSize { .. }
        | PuzzleError::InvalidWordCount(_)
        | PuzzleError::WordTooLong { .. } => StatusCode::BAD_REQUEST,
    }
}
