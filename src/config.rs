//! Tunable game constants. `Default` reproduces the classic game exactly.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Session length in whole seconds.
    pub duration_secs: u32,
    pub countdown_interval_ms: f64,
    pub spawn_interval_ms: f64,
    pub fall_interval_ms: f64,
    pub collision_interval_ms: f64,
    /// Pixels a word drops per fall tick.
    pub fall_step_px: f64,
    /// Catch line sits this far above the bottom of the play area.
    pub catch_margin_px: f64,
    /// Spawn column range in percent, `[min, max)`.
    pub spawn_min_pct: f64,
    pub spawn_max_pct: f64,
    pub shift_step_pct: f64,
    /// Rightmost legal column; shifting past either edge wraps.
    pub max_left_pct: f64,
    pub correct_points: i64,
    pub wrong_bucket_penalty: i64,
    pub miss_penalty: i64,
    /// Spawn ticks are skipped while this many words are in flight. `None` = no cap.
    pub max_active_words: Option<usize>,
    // Word box estimate until the page reports a measured size.
    pub char_width_px: f64,
    pub word_padding_px: f64,
    pub word_height_px: f64,
    /// Longest frame delta fed to the scheduler (tab switches, breakpoints).
    pub max_frame_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120,
            countdown_interval_ms: 1000.0,
            spawn_interval_ms: 2000.0,
            fall_interval_ms: 20.0,
            collision_interval_ms: 50.0,
            fall_step_px: 2.0,
            catch_margin_px: 50.0,
            spawn_min_pct: 5.0,
            spawn_max_pct: 75.0,
            shift_step_pct: 5.0,
            max_left_pct: 95.0,
            correct_points: 10,
            wrong_bucket_penalty: 5,
            miss_penalty: 5,
            max_active_words: None,
            char_width_px: 10.0,
            word_padding_px: 16.0,
            word_height_px: 24.0,
            max_frame_ms: 250.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Parse(String),
    ZeroDuration,
    NonPositiveInterval { name: &'static str, value: f64 },
    SpawnRange { min: f64, max: f64 },
    ZeroCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::ZeroDuration => write!(f, "duration_secs must be at least 1"),
            Self::NonPositiveInterval { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::SpawnRange { min, max } => write!(
                f,
                "spawn range [{min}, {max}) must be non-empty and inside [0, max_left_pct]"
            ),
            Self::ZeroCap => write!(f, "max_active_words must be at least 1 when set"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Parse a partial JSON object; missing keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        let intervals = [
            ("countdown_interval_ms", self.countdown_interval_ms),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("fall_interval_ms", self.fall_interval_ms),
            ("collision_interval_ms", self.collision_interval_ms),
            ("max_frame_ms", self.max_frame_ms),
        ];
        for (name, value) in intervals {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveInterval { name, value });
            }
        }
        if !(self.spawn_min_pct >= 0.0
            && self.spawn_min_pct < self.spawn_max_pct
            && self.spawn_max_pct <= self.max_left_pct)
        {
            return Err(ConfigError::SpawnRange {
                min: self.spawn_min_pct,
                max: self.spawn_max_pct,
            });
        }
        if self.max_active_words == Some(0) {
            return Err(ConfigError::ZeroCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = GameConfig {
            fall_interval_ms: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveInterval {
                name: "fall_interval_ms",
                value: 0.0
            })
        );

        let cfg = GameConfig {
            spawn_min_pct: 80.0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::SpawnRange { .. })));

        let cfg = GameConfig {
            max_active_words: Some(0),
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCap));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{"duration_secs": 60, "max_active_words": 8}"#)
            .expect("valid config");
        assert_eq!(cfg.duration_secs, 60);
        assert_eq!(cfg.max_active_words, Some(8));
        assert_eq!(cfg.spawn_interval_ms, 2000.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_errors_surface() {
        assert!(matches!(
            GameConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            GameConfig::from_json(r#"{"duration_secs": 0}"#),
            Err(ConfigError::ZeroDuration)
        );
    }
}
