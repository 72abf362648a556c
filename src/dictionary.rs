//! Word list: every playable word paired with the negative prefix it takes.

use crate::rng::SeededRng;
use std::fmt;

/// Negative prefix classes. One bucket exists per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Prefix {
    Un,
    In,
    Dis,
    Im,
    Ir,
    Il,
}

impl Prefix {
    /// Bucket order used by the default page layout.
    pub const ALL: [Prefix; 6] = [
        Prefix::Un,
        Prefix::In,
        Prefix::Dis,
        Prefix::Im,
        Prefix::Ir,
        Prefix::Il,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Prefix::Un => "un-",
            Prefix::In => "in-",
            Prefix::Dis => "dis-",
            Prefix::Im => "im-",
            Prefix::Ir => "ir-",
            Prefix::Il => "il-",
        }
    }

    /// Parse a bucket label. Accepts `"un-"` as well as `"un"`, case-insensitive.
    pub fn from_label(label: &str) -> Option<Prefix> {
        let trimmed = label.trim().trim_end_matches('-').to_ascii_lowercase();
        Prefix::ALL
            .into_iter()
            .find(|p| p.label().trim_end_matches('-') == trimmed)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dictionary entry. Immutable; the game only ever copies these out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub text: &'static str,
    pub prefix: Prefix,
}

const fn entry(text: &'static str, prefix: Prefix) -> WordEntry {
    WordEntry { text, prefix }
}

use Prefix::{Dis, Il, Im, In, Ir, Un};

pub const WORDS: &[WordEntry] = &[
    entry("responsible", Ir), entry("thoughtful", Un), entry("polite", Im), entry("patient", Im),
    entry("correct", In), entry("respectful", Dis), entry("advantage", Dis), entry("relevant", Ir),
    entry("faithful", Un), entry("perfect", Im), entry("usual", Un), entry("rational", Ir),
    entry("loyal", Dis), entry("like", Dis), entry("honest", Dis), entry("mortal", Im),
    entry("possible", Im), entry("separable", In), entry("resistible", Ir), entry("comfortable", Un),
    entry("happy", Un), entry("informed", Un), entry("helpful", Un), entry("healthy", Un),
    entry("real", Un), entry("fair", Un), entry("considerate", In), entry("agreement", Dis),
    entry("thinkable", Un), entry("legal", Il), entry("mature", Im), entry("literate", Il),
    entry("fortunate", Un), entry("logical", Il), entry("moral", Im), entry("practical", Im),
    entry("safe", Un), entry("surprising", Un), entry("tidy", Un), entry("regular", Ir),
    entry("legitimate", Il), entry("attractive", Un), entry("appropriate", In), entry("mobile", Im),
    entry("hospitable", In), entry("personal", Im), entry("embark", Dis), entry("official", Un),
    entry("easy", Un), entry("coherent", In), entry("continue", Dis), entry("replaceable", Ir),
    entry("capable", In), entry("do", Un), entry("competent", In),
];

/// Correct prefix for `word`, or `None` for words outside the list.
pub fn lookup(word: &str) -> Option<Prefix> {
    WORDS.iter().find(|e| e.text == word).map(|e| e.prefix)
}

/// Number of playable words (checked by the dataset tests).
pub fn len() -> usize {
    WORDS.len()
}

/// Uniformly pick one entry.
pub fn sample(rng: &mut SeededRng) -> WordEntry {
    WORDS[rng.next_index(WORDS.len())]
}

pub fn words_for(prefix: Prefix) -> impl Iterator<Item = &'static str> {
    WORDS
        .iter()
        .filter(move |e| e.prefix == prefix)
        .map(|e| e.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup("happy"), Some(Prefix::Un));
        assert_eq!(lookup("legal"), Some(Prefix::Il));
        assert_eq!(lookup("embark"), Some(Prefix::Dis));
        assert_eq!(lookup("zebra"), None);
    }

    #[test]
    fn label_round_trip() {
        for p in Prefix::ALL {
            assert_eq!(Prefix::from_label(p.label()), Some(p));
        }
        assert_eq!(Prefix::from_label(" DIS "), Some(Prefix::Dis));
        assert_eq!(Prefix::from_label("non-"), None);
    }

    #[test]
    fn sample_stays_in_dictionary() {
        let mut rng = SeededRng::new(7);
        for _ in 0..200 {
            let e = sample(&mut rng);
            assert_eq!(lookup(e.text), Some(e.prefix));
        }
    }

    #[test]
    fn words_for_il() {
        let il: Vec<_> = words_for(Prefix::Il).collect();
        assert_eq!(il, vec!["legal", "literate", "logical", "legitimate"]);
    }
}
