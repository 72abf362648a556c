//! Per-session game state: score, countdown, mistake log and in-flight words.
//!
//! The session is a plain value owned by the controller. Every other component
//! borrows it mutably for the length of one tick, so no locking is involved.

use crate::config::GameConfig;
use crate::dictionary::{Prefix, WordEntry};
use crate::geometry::{Rect, Size};
use std::fmt;

pub type WordId = u32;

/// A word currently falling through the play area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FallingWord {
    pub id: WordId,
    pub text: &'static str,
    pub correct_prefix: Prefix,
    /// Left edge in percent of the play-area width, within `[0, 95]`.
    pub horizontal_pct: f64,
    /// Top edge in pixels from the top of the play area.
    pub vertical_px: f64,
    pub size: Size,
    resolved: bool,
}

impl FallingWord {
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Bounding box in play-area pixels.
    pub fn rect(&self, play_width: f64) -> Rect {
        Rect::new(
            self.horizontal_pct * play_width / 100.0,
            self.vertical_px,
            self.size.width,
            self.size.height,
        )
    }
}

/// A word the player got wrong, shown in the end-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mistake {
    pub word: &'static str,
    pub expected: Prefix,
}

impl fmt::Display for Mistake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.word, self.expected)
    }
}

/// How a word left play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    Correct,
    WrongBucket { chosen: Prefix },
    Missed,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSession {
    pub score: i64,
    pub time_remaining: u32,
    pub mistakes: Vec<Mistake>,
    pub active_words: Vec<FallingWord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    next_id: WordId,
}

impl GameSession {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            time_remaining: duration_secs,
            ..Self::default()
        }
    }

    /// Back to a fresh session; in-flight words are dropped unscored.
    pub fn reset(&mut self, duration_secs: u32) {
        self.score = 0;
        self.time_remaining = duration_secs;
        self.mistakes.clear();
        self.active_words.clear();
    }

    pub fn spawn(&mut self, entry: WordEntry, horizontal_pct: f64, size: Size) -> WordId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.active_words.push(FallingWord {
            id,
            text: entry.text,
            correct_prefix: entry.prefix,
            horizontal_pct,
            vertical_px: 0.0,
            size,
            resolved: false,
        });
        id
    }

    pub fn word(&self, id: WordId) -> Option<&FallingWord> {
        self.active_words.iter().find(|w| w.id == id)
    }

    /// Replace the estimated box with the size the page measured.
    pub fn set_word_size(&mut self, id: WordId, size: Size) -> bool {
        match self.active_words.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                w.size = size;
                true
            }
            None => false,
        }
    }

    /// Score a word dropped into the bucket labelled `bucket`.
    ///
    /// Returns `None` when the word is unknown or was already resolved, so a
    /// word can never count twice.
    pub fn resolve_in_bucket(
        &mut self,
        id: WordId,
        bucket: Prefix,
        cfg: &GameConfig,
    ) -> Option<Outcome> {
        let word = self.claim(id)?;
        let outcome = if bucket == word.correct_prefix {
            self.score += cfg.correct_points;
            Outcome::Correct
        } else {
            self.score -= cfg.wrong_bucket_penalty;
            self.mistakes.push(Mistake {
                word: word.text,
                expected: word.correct_prefix,
            });
            Outcome::WrongBucket { chosen: bucket }
        };
        Some(outcome)
    }

    /// Record a word that reached the catch line. No-op for resolved or unknown words.
    pub fn handle_miss(&mut self, id: WordId, cfg: &GameConfig) -> Option<Outcome> {
        let word = self.claim(id)?;
        self.score -= cfg.miss_penalty;
        self.mistakes.push(Mistake {
            word: word.text,
            expected: word.correct_prefix,
        });
        Some(Outcome::Missed)
    }

    /// Drop every in-flight word without touching score or mistakes.
    pub fn discard_active(&mut self) -> Vec<WordId> {
        self.active_words.drain(..).map(|w| w.id).collect()
    }

    // Takes the word out of play and marks it resolved. Removal is what makes
    // scoring at-most-once: `active_words` never holds a resolved word, so a
    // second claim on the same id finds nothing.
    fn claim(&mut self, id: WordId) -> Option<FallingWord> {
        let idx = self
            .active_words
            .iter()
            .position(|w| w.id == id)?;
        let mut word = self.active_words.remove(idx);
        word.resolved = true;
        Some(word)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn timer_text(&self) -> String {
        format!("Time: {}s", self.time_remaining)
    }

    /// End-of-game mistake summary, one line per entry.
    pub fn summary(&self) -> String {
        if self.mistakes.is_empty() {
            return "No mistakes! Well done!".to_string();
        }
        let mut out = String::from("Mistakes:");
        for m in &self.mistakes {
            out.push('\n');
            out.push_str(&m.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::lookup;

    fn entry(text: &'static str) -> WordEntry {
        WordEntry {
            text,
            prefix: lookup(text).unwrap(),
        }
    }

    fn session_with(word: &'static str) -> (GameSession, WordId) {
        let mut s = GameSession::new(120);
        let id = s.spawn(entry(word), 40.0, Size::new(60.0, 24.0));
        (s, id)
    }

    #[test]
    fn correct_bucket_scores_ten() {
        let cfg = GameConfig::default();
        let (mut s, id) = session_with("happy");
        assert_eq!(s.resolve_in_bucket(id, Prefix::Un, &cfg), Some(Outcome::Correct));
        assert_eq!(s.score, 10);
        assert!(s.mistakes.is_empty());
        assert!(s.active_words.is_empty());
    }

    #[test]
    fn wrong_bucket_logs_mistake() {
        let cfg = GameConfig::default();
        let (mut s, id) = session_with("legal");
        assert_eq!(
            s.resolve_in_bucket(id, Prefix::Un, &cfg),
            Some(Outcome::WrongBucket { chosen: Prefix::Un })
        );
        assert_eq!(s.score, -5);
        assert_eq!(s.mistakes.len(), 1);
        assert_eq!(s.mistakes[0].to_string(), "legal → il-");
    }

    #[test]
    fn miss_then_collision_is_noop() {
        let cfg = GameConfig::default();
        let (mut s, id) = session_with("tidy");
        assert_eq!(s.handle_miss(id, &cfg), Some(Outcome::Missed));
        assert_eq!(s.score, -5);
        assert_eq!(s.mistakes.len(), 1);
        assert_eq!(s.resolve_in_bucket(id, Prefix::Un, &cfg), None);
        assert_eq!(s.handle_miss(id, &cfg), None);
        assert_eq!(s.score, -5);
        assert_eq!(s.mistakes.len(), 1);
    }

    #[test]
    fn scored_word_leaves_the_active_set() {
        let cfg = GameConfig::default();
        let mut s = GameSession::new(120);
        let kept = s.spawn(entry("happy"), 10.0, Size::new(60.0, 24.0));
        let scored = s.spawn(entry("legal"), 50.0, Size::new(60.0, 24.0));
        assert_eq!(s.resolve_in_bucket(scored, Prefix::Il, &cfg), Some(Outcome::Correct));
        assert!(s.word(scored).is_none());
        assert!(s.active_words.iter().all(|w| !w.is_resolved()));
        assert_eq!(s.word(kept).map(|w| w.text), Some("happy"));
        assert_eq!(s.handle_miss(scored, &cfg), None);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn discard_leaves_score_alone() {
        let (mut s, _) = session_with("moral");
        s.score = 35;
        assert_eq!(s.discard_active().len(), 1);
        assert_eq!(s.score, 35);
        assert!(s.mistakes.is_empty());
    }

    #[test]
    fn ids_are_unique_across_reset() {
        let (mut s, first) = session_with("moral");
        s.reset(120);
        let second = s.spawn(entry("legal"), 10.0, Size::default());
        assert_ne!(first, second);
    }

    #[test]
    fn summary_text() {
        let cfg = GameConfig::default();
        let (mut s, id) = session_with("legal");
        assert_eq!(s.summary(), "No mistakes! Well done!");
        s.handle_miss(id, &cfg);
        assert_eq!(s.summary(), "Mistakes:\nlegal → il-");
        assert_eq!(s.score_text(), "Score: -5");
        assert_eq!(s.timer_text(), "Time: 120s");
    }
}
