//! Game controller: owns the session and the periodic tasks, and walks the
//! Idle → Running → Ended state machine.

use crate::collision::detect_collisions;
use crate::config::{ConfigError, GameConfig};
use crate::event::GameEvent;
use crate::geometry::Size;
use crate::input::{Direction, shift_words};
use crate::layout::Layout;
use crate::rng::SeededRng;
use crate::scheduler::{Scheduler, Task};
use crate::session::{GameSession, WordId};
use crate::spawner::{fall_step, spawn_word};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Before the first start; defaults shown, nothing ticking.
    Idle,
    Running,
    /// Countdown hit zero; summary on screen until the next start.
    Ended,
}

pub struct GameController {
    cfg: GameConfig,
    session: GameSession,
    scheduler: Scheduler,
    rng: SeededRng,
    phase: Phase,
}

impl GameController {
    /// Rejects configs that fail `GameConfig::validate`; a zero period or a
    /// non-positive frame cap would stall or panic `advance`.
    pub fn new(cfg: GameConfig, rng: SeededRng) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let session = GameSession::new(cfg.duration_secs);
        Ok(Self {
            cfg,
            session,
            scheduler: Scheduler::new(),
            rng,
            phase: Phase::Idle,
        })
    }

    pub fn with_seed(cfg: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(cfg, SeededRng::new(seed))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Start (or restart) a session. Always begins from a clean slate.
    pub fn start(&mut self) -> GameEvent {
        self.session.reset(self.cfg.duration_secs);
        self.scheduler.start(&self.cfg);
        self.phase = Phase::Running;
        GameEvent::Started {
            duration_secs: self.cfg.duration_secs,
        }
    }

    /// Back to the pre-game screen with nothing ticking.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.session.reset(self.cfg.duration_secs);
        self.phase = Phase::Idle;
    }

    /// Route a key press. Returns true when the key moved words.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        match Direction::from_key(key) {
            Some(dir) => {
                shift_words(
                    &mut self.session,
                    dir,
                    self.cfg.shift_step_pct,
                    self.cfg.max_left_pct,
                );
                true
            }
            None => false,
        }
    }

    pub fn set_word_size(&mut self, id: WordId, size: Size) -> bool {
        self.session.set_word_size(id, size)
    }

    /// Advance game time by `dt_ms` (clamped to `max_frame_ms`), running every
    /// task that falls due in order.
    pub fn advance(&mut self, dt_ms: f64, layout: &Layout) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running {
            return events;
        }
        let dt = if dt_ms.is_finite() {
            dt_ms.clamp(0.0, self.cfg.max_frame_ms)
        } else {
            0.0
        };
        let until = self.scheduler.now_ms() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            match task {
                Task::Countdown => {
                    self.session.time_remaining = self.session.time_remaining.saturating_sub(1);
                    events.push(GameEvent::Tick {
                        time_remaining: self.session.time_remaining,
                    });
                    if self.session.time_remaining == 0 {
                        events.push(self.end());
                        return events;
                    }
                }
                Task::Spawn => {
                    events.push(spawn_word(&mut self.session, &mut self.rng, &self.cfg));
                }
                Task::Fall => events.extend(fall_step(&mut self.session, layout, &self.cfg)),
                Task::Collision => {
                    events.extend(detect_collisions(&mut self.session, layout, &self.cfg))
                }
            }
        }
        self.scheduler.settle(until);
        events
    }

    // Cancel every task and drop the words still in flight without scoring them.
    fn end(&mut self) -> GameEvent {
        self.scheduler.cancel_all();
        let discarded = self.session.discard_active();
        self.phase = Phase::Ended;
        GameEvent::Ended {
            score: self.session.score,
            mistakes: self.session.mistakes.len(),
            discarded,
        }
    }

    pub fn summary(&self) -> String {
        self.session.summary()
    }
}
