//! Axum route handlers for the Crossword API.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::crossword::clues::{number_clues, NumberedClue};
use crate::crossword::engine::place_all;
use crate::crossword::render::{render_grid, OutputCell};
use crate::crossword::validation::{normalize_entries, WordInput};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CrosswordRequest {
    pub words: Vec<WordInput>,
    /// Maximum number of words to lay out. Defaults to `CROSSWORD_WORD_LIMIT`.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CrosswordResponse {
    pub date: NaiveDate,
    pub grid: Vec<Vec<OutputCell>>,
    pub words: Vec<NumberedClue>,
    /// Submitted words that could not be placed.
    pub skipped: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/crossword/today
///
/// Lays out the submitted words and returns the rendered grid with numbered
/// clues. Words that fit nowhere are listed under `skipped`.
pub async fn handle_crossword_today(
    State(state): State<AppState>,
    Json(request): Json<CrosswordRequest>,
) -> Result<Json<CrosswordResponse>, AppError> {
    let limit = request.limit.unwrap_or(state.config.crossword_word_limit);
    let entries = normalize_entries(&request.words, limit)?;
    let size = state.config.crossword_grid_size;

    // CPU-bound placement runs on the blocking pool.
    let (entries, report) = tokio::task::spawn_blocking(move || {
        let report = place_all(&entries, size);
        (entries, report)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in placement: {e}")))?;
    let report = report?;

    info!(
        requested = entries.len(),
        placed = report.placements.len(),
        skipped = report.skipped.len(),
        size,
        "Crossword generated"
    );

    Ok(Json(CrosswordResponse {
        date: Utc::now().date_naive(),
        grid: render_grid(&report.grid),
        words: number_clues(&entries, &report.placements),
        skipped: report.skipped,
    }))
}
