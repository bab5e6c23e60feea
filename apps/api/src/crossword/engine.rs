//! Grid placement engine: lays an ordered word list onto a square grid.
//!
//! # Algorithm
//! 1. The first entry (the anchor) goes ACROSS at the grid centre, unchecked.
//! 2. Each later entry, in input order, tries to cross an already committed
//!    word: committed placements in commit order, then candidate letter index,
//!    then placed letter index. The first valid crossing wins.
//! 3. With no valid crossing, the grid is scanned row-major for any cell where
//!    the word fits DOWN.
//! 4. A word that fits nowhere is skipped and reported in
//!    [`PlacementReport::skipped`].
//!
//! Placement is greedy: a committed word is never moved to make room for a
//! later one.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::crossword::grid::{Direction, Grid};

/// Default edge length of the puzzle grid.
pub const DEFAULT_GRID_SIZE: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One input word and its clue. `word` is uppercase A–Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

/// A committed word on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Index of the originating [`WordEntry`] in the input list.
    #[serde(skip)]
    pub entry_index: usize,
}

/// Result of a full placement run.
#[derive(Debug, Clone)]
pub struct PlacementReport {
    pub grid: Grid,
    /// Committed placements in commit order.
    pub placements: Vec<Placement>,
    /// Words that fit nowhere, in input order.
    pub skipped: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("No words supplied")]
    EmptyInput,

    #[error("Anchor word '{word}' has {len} letters but the grid is only {size} wide")]
    AnchorTooLong { word: String, len: usize, size: usize },

    #[error("Word {index} ('{word}') must be non-empty uppercase A-Z")]
    InvalidWord { index: usize, word: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Places every entry it can on a fresh `size × size` grid.
///
/// Fails only on malformed input or an anchor longer than the grid; words that
/// cannot be placed are skipped and listed in the report.
pub fn place_all(entries: &[WordEntry], size: usize) -> Result<PlacementReport, CrosswordError> {
    let (anchor, rest) = entries.split_first().ok_or(CrosswordError::EmptyInput)?;

    for (index, entry) in entries.iter().enumerate() {
        if entry.word.is_empty() || !entry.word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CrosswordError::InvalidWord {
                index,
                word: entry.word.clone(),
            });
        }
    }

    let mut grid = Grid::new(size);
    let mut placements: Vec<Placement> = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    placements.push(place_anchor(&mut grid, anchor)?);

    for (offset, entry) in rest.iter().enumerate() {
        let entry_index = offset + 1;
        let found = find_intersection(&grid, &placements, &entry.word)
            .or_else(|| find_fallback(&grid, &entry.word));

        match found {
            Some((row, col, direction)) => {
                grid.write(&entry.word, row, col, direction);
                debug!(word = %entry.word, row, col, ?direction, "Committed placement");
                placements.push(Placement {
                    word: entry.word.clone(),
                    row,
                    col,
                    direction,
                    entry_index,
                });
            }
            None => {
                warn!(word = %entry.word, entry_index, "No valid placement; skipping word");
                skipped.push(entry.word.clone());
            }
        }
    }

    Ok(PlacementReport {
        grid,
        placements,
        skipped,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Placement steps
// ────────────────────────────────────────────────────────────────────────────

/// Anchor position for a word of `len` letters: centre row, horizontally centred.
pub fn anchor_position(len: usize, size: usize) -> (usize, usize) {
    (size / 2, (size - len) / 2)
}

fn place_anchor(grid: &mut Grid, entry: &WordEntry) -> Result<Placement, CrosswordError> {
    let size = grid.size();
    let len = entry.word.chars().count();
    if len > size {
        return Err(CrosswordError::AnchorTooLong {
            word: entry.word.clone(),
            len,
            size,
        });
    }

    let (row, col) = anchor_position(len, size);
    grid.write(&entry.word, row, col, Direction::Across);
    debug!(word = %entry.word, row, col, "Placed anchor word");

    Ok(Placement {
        word: entry.word.clone(),
        row,
        col,
        direction: Direction::Across,
        entry_index: 0,
    })
}

/// First valid crossing of `word` with a committed placement.
///
/// Search order: placements in commit order, candidate letter `i` ascending,
/// placed letter `j` ascending.
fn find_intersection(
    grid: &Grid,
    placements: &[Placement],
    word: &str,
) -> Option<(usize, usize, Direction)> {
    let candidate: Vec<char> = word.chars().collect();
    let len = candidate.len();

    for placed in placements {
        let placed_letters: Vec<char> = placed.word.chars().collect();
        let direction = placed.direction.perpendicular();

        for (i, &ch) in candidate.iter().enumerate() {
            for (j, &other) in placed_letters.iter().enumerate() {
                if ch != other {
                    continue;
                }

                let (row, col) = crossing_anchor(placed, i, j);
                let Some((row, col)) = grid.span_in_bounds(row, col, len, direction) else {
                    continue;
                };
                if grid.can_place(word, row, col, direction) {
                    return Some((row, col, direction));
                }
            }
        }
    }

    None
}

/// Anchor that puts candidate letter `i` on top of letter `j` of `placed`.
fn crossing_anchor(placed: &Placement, i: usize, j: usize) -> (isize, isize) {
    let (row, col) = (placed.row as isize, placed.col as isize);
    let (i, j) = (i as isize, j as isize);
    match placed.direction {
        Direction::Across => (row - i, col + j),
        Direction::Down => (row + j, col - i),
    }
}

/// Row-major scan for the first cell where `word` fits DOWN.
fn find_fallback(grid: &Grid, word: &str) -> Option<(usize, usize, Direction)> {
    let size = grid.size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .find(|&(row, col)| grid.can_place(word, row, col, Direction::Down))
        .map(|(row, col)| (row, col, Direction::Down))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
