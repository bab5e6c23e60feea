//! Puzzle grid state, a square matrix of letter cells with bounds and
//! collision checks for word placement.
//!
//! A cell that already holds a letter only accepts that same letter. Every
//! check covers the word's full span, so a placement is either entirely valid
//! or rejected.

use serde::{Deserialize, Serialize};

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The orientation that crosses this one.
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Lower-case label used by the client-facing clue list.
    pub fn as_lower_str(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }

    /// Row/column step taken per letter.
    fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Square letter grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `(row, col)`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Converts a signed anchor into grid coordinates when the whole span of
    /// `len` letters in `direction` stays inside the grid.
    pub fn span_in_bounds(
        &self,
        row: isize,
        col: isize,
        len: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.size || col >= self.size {
            return None;
        }
        let end = match direction {
            Direction::Across => col + len,
            Direction::Down => row + len,
        };
        (end <= self.size).then_some((row, col))
    }

    /// True when `word` fits at `(row, col)` in `direction`: in bounds, and each
    /// cell on its span is empty or already holds the matching letter.
    pub fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let Some((row, col)) =
            self.span_in_bounds(row as isize, col as isize, word.chars().count(), direction)
        else {
            return false;
        };

        let (dr, dc) = direction.step();
        word.chars().enumerate().all(|(i, ch)| {
            match self.cells[self.idx(row + i * dr, col + i * dc)] {
                None => true,
                Some(existing) => existing == ch,
            }
        })
    }

    /// Writes `word` along its span. Callers validate with [`Grid::can_place`]
    /// first; the anchor word is the only unchecked write.
    pub fn write(&mut self, word: &str, row: usize, col: usize, direction: Direction) {
        let (dr, dc) = direction.step();
        for (i, ch) in word.chars().enumerate() {
            let idx = self.idx(row + i * dr, col + i * dc);
            self.cells[idx] = Some(ch);
        }
    }

    /// Letters currently on the span, with `None` for empty cells.
    #[cfg(test)]
    pub fn read(&self, row: usize, col: usize, len: usize, direction: Direction) -> Vec<Option<char>> {
        let (dr, dc) = direction.step();
        (0..len).map(|i| self.get(row + i * dr, col + i * dc)).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(grid.get(r, c), None);
            }
        }
    }

    #[test]
    fn test_write_across_and_down() {
        let mut grid = Grid::new(5);
        grid.write("CAT", 1, 1, Direction::Across);
        grid.write("ART", 1, 2, Direction::Down);

        assert_eq!(grid.read(1, 1, 3, Direction::Across), vec![Some('C'), Some('A'), Some('T')]);
        assert_eq!(grid.read(1, 2, 3, Direction::Down), vec![Some('A'), Some('R'), Some('T')]);
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = Grid::new(5);
        assert!(grid.can_place("HELLO", 0, 0, Direction::Across));
        assert!(!grid.can_place("HELLO", 0, 1, Direction::Across));
        assert!(!grid.can_place("HELLO", 1, 0, Direction::Down));
        assert!(!grid.can_place("A", 5, 0, Direction::Down));
    }

    #[test]
    fn test_can_place_rejects_conflicting_letter() {
        let mut grid = Grid::new(5);
        grid.write("CAT", 2, 0, Direction::Across);
        // Crosses (2, 1) which holds 'A'.
        assert!(grid.can_place("BAD", 1, 1, Direction::Down));
        assert!(!grid.can_place("BED", 1, 1, Direction::Down));
    }

    #[test]
    fn test_can_place_allows_full_overlap_with_same_letters() {
        let mut grid = Grid::new(5);
        grid.write("CAT", 0, 0, Direction::Across);
        assert!(grid.can_place("CAT", 0, 0, Direction::Across));
    }

    #[test]
    fn test_span_in_bounds_negative_anchor() {
        let grid = Grid::new(10);
        assert_eq!(grid.span_in_bounds(-1, 3, 3, Direction::Down), None);
        assert_eq!(grid.span_in_bounds(3, -2, 3, Direction::Across), None);
        assert_eq!(grid.span_in_bounds(7, 3, 3, Direction::Down), Some((7, 3)));
        assert_eq!(grid.span_in_bounds(8, 3, 3, Direction::Down), None);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let grid = Grid::new(3);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_direction_perpendicular_and_labels() {
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
        assert_eq!(Direction::Across.as_lower_str(), "across");
        assert_eq!(
            serde_json::to_string(&Direction::Down).unwrap(),
            "\"DOWN\""
        );
    }
}
