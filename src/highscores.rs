//! High score leaderboard
//!
//! In-memory top 10 of completed runs, ranked by item total (score breaks
//! ties). Discarded when the process exits.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Items collected over the run
    pub items: u32,
    /// Final score
    pub score: u64,
    /// Level reached
    pub level: u32,
}

impl HighScoreEntry {
    /// Sort key: items first, score breaks ties
    fn key(&self) -> (u32, u64) {
        (self.items, self.score)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run qualifies for the leaderboard
    pub fn qualifies(&self, items: u32, score: u64) -> bool {
        if items == 0 && score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Beats the lowest entry?
        self.entries
            .last()
            .map(|e| (items, score) > e.key())
            .unwrap_or(true)
    }

    /// Get the rank a run would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, items: u32, score: u64) -> Option<usize> {
        if !self.qualifies(items, score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| (items, score) > e.key());
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a completed run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, items: u32, score: u64, level: u32) -> Option<usize> {
        if !self.qualifies(items, score) {
            return None;
        }

        let entry = HighScoreEntry {
            items,
            score,
            level,
        };

        // Insertion point, sorted descending by (items, score)
        let pos = self.entries.iter().position(|e| entry.key() > e.key());
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of the top entry (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_does_not_qualify() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0, 0));
        assert!(scores.qualifies(0, 10)); // obstacle points only still count
        assert!(scores.qualifies(1, 0));
    }

    #[test]
    fn test_ranked_by_items_then_score() {
        let mut scores = HighScores::new();
        scores.add_score(5, 100, 1);
        scores.add_score(8, 50, 1);
        scores.add_score(5, 200, 1);

        let keys: Vec<_> = scores.entries.iter().map(|e| (e.items, e.score)).collect();
        assert_eq!(keys, vec![(8, 50), (5, 200), (5, 100)]);
    }

    #[test]
    fn test_truncates_to_top_ten() {
        let mut scores = HighScores::new();
        for i in 1..=15u32 {
            scores.add_score(i, 0, 1);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Only the best ten survive
        assert_eq!(scores.entries.first().unwrap().items, 15);
        assert_eq!(scores.entries.last().unwrap().items, 6);
        // Worse than everything on a full board: rejected
        assert_eq!(scores.add_score(1, 0, 1), None);
    }

    #[test]
    fn test_potential_rank_matches_insertion() {
        let mut scores = HighScores::new();
        scores.add_score(10, 0, 1);
        scores.add_score(4, 0, 1);

        assert_eq!(scores.potential_rank(7, 0), Some(2));
        assert_eq!(scores.add_score(7, 0, 1), Some(2));
    }
}
