//! Client-facing projection of the puzzle grid.

use serde::Serialize;

use crate::crossword::grid::Grid;

/// One rendered cell. Never-written cells are blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputCell {
    pub letter: Option<char>,
    pub is_block: bool,
    /// Solver input slot, present (empty) on letter cells only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl OutputCell {
    fn from_cell(cell: Option<char>) -> Self {
        match cell {
            Some(letter) => OutputCell {
                letter: Some(letter),
                is_block: false,
                input: Some(String::new()),
            },
            None => OutputCell {
                letter: None,
                is_block: true,
                input: None,
            },
        }
    }
}

/// Renders the grid row by row. Pure: the same grid always renders the same.
pub fn render_grid(grid: &Grid) -> Vec<Vec<OutputCell>> {
    let size = grid.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| OutputCell::from_cell(grid.get(row, col)))
                .collect()
        })
        .collect()
}
