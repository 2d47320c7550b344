//! Scores of finished sessions

use super::QuizSession;

/// Caller-owned list of finished session scores, oldest first
#[derive(Debug, Clone, Default)]
pub struct QuizHistory {
    scores: Vec<u32>,
}

impl QuizHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session's score
    pub fn record(&mut self, session: &QuizSession) {
        self.scores.push(session.score());
    }

    /// The last `n` scores, oldest first
    pub fn recent(&self, n: usize) -> &[u32] {
        let start = self.scores.len().saturating_sub(n);
        &self.scores[start..]
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.iter().copied().max()
    }
}
