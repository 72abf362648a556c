//! Axis-aligned rectangles in play-area pixel space (origin top-left, y down).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build from edges; used when converting `getBoundingClientRect` output.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Signed horizontal overlap; zero or negative when the spans are disjoint.
    pub fn horizontal_overlap(&self, other: &Rect) -> f64 {
        self.right().min(other.right()) - self.left.max(other.left)
    }
}

/// Minimum share of the word's width that must sit over a bucket.
pub const MAJORITY_OVERLAP: f64 = 0.5;

/// Whether a falling word rectangle lands in a bucket rectangle: the word's
/// bottom edge has reached the bucket's top edge and at least half of the
/// word's width overlaps the bucket (inclusive).
pub fn lands_in(word: &Rect, bucket: &Rect) -> bool {
    let overlap = word.horizontal_overlap(bucket);
    let word_width = word.right() - word.left;
    word.bottom() >= bucket.top
        && overlap > 0.0
        && word_width > 0.0
        && overlap / word_width >= MAJORITY_OVERLAP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(left: f64, right: f64) -> Rect {
        Rect::from_edges(left, 90.0, right, 100.0)
    }

    #[test]
    fn half_overlap_is_inclusive() {
        let bucket = Rect::from_edges(15.0, 100.0, 25.0, 130.0);
        assert!(lands_in(&word(10.0, 20.0), &bucket));
    }

    #[test]
    fn under_half_overlap_misses() {
        let bucket = Rect::from_edges(16.0, 100.0, 21.0, 130.0);
        assert!(!lands_in(&word(10.0, 20.0), &bucket));
    }

    #[test]
    fn needs_vertical_contact() {
        let bucket = Rect::from_edges(10.0, 100.5, 20.0, 130.0);
        assert!(!lands_in(&word(10.0, 20.0), &bucket));
    }

    #[test]
    fn disjoint_spans() {
        let bucket = Rect::from_edges(30.0, 100.0, 40.0, 130.0);
        assert!(word(10.0, 20.0).horizontal_overlap(&bucket) < 0.0);
        assert!(!lands_in(&word(10.0, 20.0), &bucket));
    }

    #[test]
    fn zero_width_word_never_lands() {
        let bucket = Rect::from_edges(0.0, 0.0, 100.0, 10.0);
        assert!(!lands_in(&Rect::new(5.0, 0.0, 0.0, 10.0), &bucket));
    }
}
