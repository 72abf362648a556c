//! Bucket collision pass.

use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::geometry::lands_in;
use crate::layout::Layout;
use crate::session::GameSession;

/// Collision tick: test each active word against the buckets in layout order
/// and score it in the first bucket it lands in.
pub fn detect_collisions(
    session: &mut GameSession,
    layout: &Layout,
    cfg: &GameConfig,
) -> Vec<GameEvent> {
    let play_width = layout.play_area.width;
    let hits: Vec<_> = session
        .active_words
        .iter()
        .filter_map(|w| {
            let rect = w.rect(play_width);
            layout
                .buckets
                .iter()
                .find(|b| lands_in(&rect, &b.rect))
                .map(|b| (w.id, w.text, w.correct_prefix, b.prefix))
        })
        .collect();

    let mut events = Vec::with_capacity(hits.len());
    for (id, text, expected, bucket) in hits {
        if let Some(outcome) = session.resolve_in_bucket(id, bucket, cfg) {
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
