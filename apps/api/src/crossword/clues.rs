//! Clue numbering for placed words.
//!
//! Numbers run 1..n over placed words only, in placement order. Clue text is
//! looked up through `Placement::entry_index`, so a word skipped mid-list never
//! shifts the clues of the words after it.

use serde::Serialize;

use crate::crossword::engine::{Placement, WordEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedClue {
    pub number: usize,
    /// "across" or "down".
    pub direction: &'static str,
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

pub fn number_clues(entries: &[WordEntry], placements: &[Placement]) -> Vec<NumberedClue> {
    placements
        .iter()
        .filter_map(|p| entries.get(p.entry_index).map(|entry| (p, entry)))
        .enumerate()
        .map(|(idx, (p, entry))| NumberedClue {
            number: idx + 1,
            direction: p.direction.as_lower_str(),
            clue: entry.clue.clone(),
            answer: entry.word.clone(),
            row: p.row,
            col: p.col,
        })
        .collect()
}
