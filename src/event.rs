use crate::dictionary::Prefix;
use crate::session::{Outcome, WordId};

/// Things that happened during one `advance` call, in order. The page uses them
/// to create and remove word elements, refresh text and write console lines.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameEvent {
    Started {
        duration_secs: u32,
    },
    Spawned {
        id: WordId,
        text: &'static str,
        horizontal_pct: f64,
    },
    Resolved {
        id: WordId,
        text: &'static str,
        expected: Prefix,
        outcome: Outcome,
        score_after: i64,
    },
    Tick {
        time_remaining: u32,
    },
    /// Spawn tick skipped because the active-word cap was reached.
    SpawnSkipped {
        active: usize,
    },
    Ended {
        score: i64,
        mistakes: usize,
        discarded: Vec<WordId>,
    },
}

impl GameEvent {
    /// One console line for this event.
    pub fn describe(&self) -> String {
        match self {
            Self::Started { duration_secs } => format!("game started ({duration_secs}s)"),
            Self::Spawned {
                id,
                text,
                horizontal_pct,
            } => format!("spawn #{id} '{text}' at {horizontal_pct:.1}%"),
            Self::Resolved {
                id,
                text,
                expected,
                outcome,
                score_after,
            } => {
                let what = match outcome {
                    Outcome::Correct => "correct".to_string(),
                    Outcome::WrongBucket { chosen } => format!("wrong bucket {chosen}"),
                    Outcome::Missed => "missed".to_string(),
                };
                format!("#{id} '{text}' ({expected}): {what}, score {score_after}")
            }
            Self::Tick { time_remaining } => format!("time {time_remaining}s"),
            Self::SpawnSkipped { active } => format!("spawn skipped, {active} words active"),
            Self::Ended {
                score,
                mistakes,
                discarded,
            } => format!(
                "game over: score {score}, {mistakes} mistakes, {} words discarded",
                discarded.len()
            ),
        }
    }
}
