//! Word spawning and the shared fall pass.

use crate::config::GameConfig;
use crate::dictionary;
use crate::event::GameEvent;
use crate::geometry::Size;
use crate::layout::Layout;
use crate::rng::SeededRng;
use crate::session::{GameSession, Outcome};

/// Box used for a word until the page measures the real element.
pub fn estimate_size(text: &str, cfg: &GameConfig) -> Size {
    Size::new(
        text.chars().count() as f64 * cfg.char_width_px + cfg.word_padding_px,
        cfg.word_height_px,
    )
}

/// Spawn tick: drop one random word at a random column near the top.
pub fn spawn_word(session: &mut GameSession, rng: &mut SeededRng, cfg: &GameConfig) -> GameEvent {
    if let Some(cap) = cfg.max_active_words {
        if session.active_words.len() >= cap {
            return GameEvent::SpawnSkipped {
                active: session.active_words.len(),
            };
        }
    }
    let entry = dictionary::sample(rng);
    let horizontal_pct = rng.next_range(cfg.spawn_min_pct, cfg.spawn_max_pct);
    let id = session.spawn(entry, horizontal_pct, estimate_size(entry.text, cfg));
    GameEvent::Spawned {
        id,
        text: entry.text,
        horizontal_pct,
    }
}

/// Fall tick: move every in-flight word down one step and hand words that
/// reached the catch line to the miss handler.
pub fn fall_step(session: &mut GameSession, layout: &Layout, cfg: &GameConfig) -> Vec<GameEvent> {
    let catch_line = layout.catch_line(cfg.catch_margin_px);
    let mut caught = Vec::new();
    for word in session.active_words.iter_mut() {
        word.vertical_px += cfg.fall_step_px;
        if word.vertical_px >= catch_line {
            caught.push((word.id, word.text, word.correct_prefix));
        }
    }

    let mut events = Vec::new();
    for (id, text, expected) in caught {
        if let Some(outcome) = session.handle_miss(id, cfg) {
            debug_assert_eq!(outcome, Outcome::Missed);
            events.push(GameEvent::Resolved {
                id,
                text,
                expected,
                outcome,
                score_after: session.score,
            });
        }
    }
    events
}
