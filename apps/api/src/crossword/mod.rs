// Crossword generation
// Implements: grid placement engine, grid rendering, clue numbering, request normalization.
// Placement is CPU-bound and runs inside tokio::task::spawn_blocking from the handler.

pub mod clues;
pub mod engine;
pub mod grid;
pub mod handlers;
pub mod render;
pub mod validation;

// Re-export the public API consumed by other modules (config, errors).
pub use engine::{CrosswordError, DEFAULT_GRID_SIZE};
