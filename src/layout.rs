//! Play-area description supplied by the page each frame.

use crate::dictionary::Prefix;
use crate::geometry::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    pub prefix: Prefix,
    /// In play-area pixels, same space as the falling words.
    pub rect: Rect,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub play_area: Size,
    /// Layout order; the first bucket a word lands in wins.
    pub buckets: Vec<Bucket>,
}

impl Layout {
    pub fn new(play_area: Size, buckets: Vec<Bucket>) -> Self {
        Self { play_area, buckets }
    }

    /// A row of equally wide buckets, one per prefix, sitting on the catch line.
    pub fn uniform(play_area: Size, bucket_height: f64, catch_margin: f64) -> Self {
        let n = Prefix::ALL.len() as f64;
        let w = play_area.width / n;
        let top = play_area.height - catch_margin;
        let buckets = Prefix::ALL
            .into_iter()
            .enumerate()
            .map(|(i, prefix)| Bucket {
                prefix,
                rect: Rect::new(i as f64 * w, top, w, bucket_height),
            })
            .collect();
        Self::new(play_area, buckets)
    }

    /// Vertical position at which an unresolved word counts as missed.
    pub fn catch_line(&self, margin: f64) -> f64 {
        (self.play_area.height - margin).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_row_covers_width() {
        let l = Layout::uniform(Size::new(600.0, 500.0), 40.0, 50.0);
        assert_eq!(l.buckets.len(), 6);
        assert_eq!(l.buckets[0].prefix, Prefix::Un);
        assert_eq!(l.buckets[5].rect.right(), 600.0);
        assert!(l.buckets.iter().all(|b| b.rect.top == 450.0));
        assert_eq!(l.catch_line(50.0), 450.0);
    }
}
