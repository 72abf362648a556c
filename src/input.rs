//! Left/right steering of the falling words.

use crate::session::GameSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value; every other key is ignored.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// New column after one step, wrapping past either edge to the opposite one.
pub fn shifted(pct: f64, dir: Direction, step: f64, max_left: f64) -> f64 {
    match dir {
        Direction::Left => {
            let next = pct - step;
            if next < 0.0 { max_left } else { next }
        }
        Direction::Right => {
            let next = pct + step;
            if next > max_left { 0.0 } else { next }
        }
    }
}

/// Shift every in-flight word one step.
pub fn shift_words(session: &mut GameSession, dir: Direction, step: f64, max_left: f64) {
    for word in session.active_words.iter_mut() {
        word.horizontal_pct = shifted(word.horizontal_pct, dir, step, max_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Prefix, WordEntry};
    use crate::geometry::Size;

    #[test]
    fn wraps_at_edges() {
        assert_eq!(shifted(2.0, Direction::Left, 5.0, 95.0), 95.0);
        assert_eq!(shifted(94.0, Direction::Right, 5.0, 95.0), 0.0);
        assert_eq!(shifted(90.0, Direction::Right, 5.0, 95.0), 95.0);
        assert_eq!(shifted(5.0, Direction::Left, 5.0, 95.0), 0.0);
    }

    #[test]
    fn only_arrow_keys_map() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowUp"), None);
        assert_eq!(Direction::from_key("a"), None);
    }

    #[test]
    fn shifts_all_active_words() {
        let mut s = GameSession::new(120);
        let e = WordEntry {
            text: "happy",
            prefix: Prefix::Un,
        };
        s.spawn(e, 2.0, Size::default());
        s.spawn(e, 50.0, Size::default());
        shift_words(&mut s, Direction::Left, 5.0, 95.0);
        let cols: Vec<f64> = s.active_words.iter().map(|w| w.horizontal_pct).collect();
        assert_eq!(cols, vec![95.0, 45.0]);
    }
}
