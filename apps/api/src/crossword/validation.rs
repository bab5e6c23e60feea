use serde::Deserialize;

use crate::crossword::engine::WordEntry;
use crate::errors::AppError;

/// A word/clue pair as submitted by the client, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct WordInput {
    pub word: String,
    pub clue: String,
}

/// Normalizes client input into engine entries.
///
/// - at most `limit` entries are kept, in submitted order
/// - words are trimmed and upper-cased, and must be ASCII letters only
/// - clues are trimmed and must not be empty
pub fn normalize_entries(inputs: &[WordInput], limit: usize) -> Result<Vec<WordEntry>, AppError> {
    if inputs.is_empty() {
        return Err(AppError::Validation("words cannot be empty".to_string()));
    }
    if limit == 0 {
        return Err(AppError::Validation(
            "limit must be at least 1".to_string(),
        ));
    }

    inputs
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, input)| normalize_one(idx, input))
        .collect()
}

fn normalize_one(idx: usize, input: &WordInput) -> Result<WordEntry, AppError> {
    let word = input.word.trim().to_ascii_uppercase();
    if word.is_empty() {
        return Err(AppError::Validation(format!("words[{idx}].word cannot be empty")));
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(AppError::Validation(format!(
            "words[{idx}].word '{}' must contain letters A-Z only",
            input.word.trim()
        )));
    }

    let clue = input.clue.trim();
    if clue.is_empty() {
        return Err(AppError::Validation(format!("words[{idx}].clue cannot be empty")));
    }

    Ok(WordEntry::new(word, clue))
}
