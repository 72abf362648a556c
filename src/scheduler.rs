//! Game-time periodic tasks.
//!
//! All four session tasks share one clock. `pop_due` hands them out in
//! chronological order, one at a time, so each callback runs to completion
//! before the next one sees the session. Cancelling is just deactivating the
//! tickers; there are no per-word timers to chase down.

use crate::config::GameConfig;

/// Periodic tasks. Declaration order breaks ties between tasks due at the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    Countdown,
    Spawn,
    Fall,
    Collision,
}

impl Task {
    const ALL: [Task; 4] = [Task::Countdown, Task::Spawn, Task::Fall, Task::Collision];
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ticker {
    interval_ms: f64,
    next_due_ms: f64,
    active: bool,
}

impl Ticker {
    const IDLE: Ticker = Ticker {
        interval_ms: 0.0,
        next_due_ms: 0.0,
        active: false,
    };

    fn start(interval_ms: f64, now: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: now + interval_ms,
            active: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scheduler {
    now_ms: f64,
    tickers: [Ticker; 4],
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            tickers: [Ticker::IDLE; 4],
        }
    }

    /// Game time elapsed since the last `start`.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Restart the clock at zero and arm every task with its configured period.
    pub fn start(&mut self, cfg: &GameConfig) {
        self.now_ms = 0.0;
        for task in Task::ALL {
            let interval = match task {
                Task::Countdown => cfg.countdown_interval_ms,
                Task::Spawn => cfg.spawn_interval_ms,
                Task::Fall => cfg.fall_interval_ms,
                Task::Collision => cfg.collision_interval_ms,
            };
            self.tickers[task as usize] = Ticker::start(interval, self.now_ms);
        }
    }

    pub fn cancel_all(&mut self) {
        for t in &mut self.tickers {
            t.active = false;
        }
    }

    /// Whether `task` is armed; lets callers and tests inspect cancellation.
    pub fn is_active(&self, task: Task) -> bool {
        self.tickers[task as usize].active
    }

    pub fn any_active(&self) -> bool {
        self.tickers.iter().any(|t| t.active)
    }

    /// Take the earliest task due at or before `until`, moving the clock to its
    /// due time and rescheduling it one period later.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<Task> {
        let mut best: Option<Task> = None;
        for task in Task::ALL {
            let t = &self.tickers[task as usize];
            if !t.active || t.next_due_ms > until_ms {
                continue;
            }
            match best {
                Some(b) if self.tickers[b as usize].next_due_ms <= t.next_due_ms => {}
                _ => best = Some(task),
            }
        }
        let task = best?;
        let t = &mut self.tickers[task as usize];
        self.now_ms = t.next_due_ms;
        t.next_due_ms += t.interval_ms;
        Some(task)
    }

    /// Move the clock forward to `until` once every due task has been taken.
    pub fn settle(&mut self, until_ms: f64) {
        if until_ms > self.now_ms {
            self.now_ms = until_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler, until: f64) -> Vec<(Task, f64)> {
        let mut out = Vec::new();
        while let Some(task) = s.pop_due(until) {
            out.push((task, s.now_ms()));
        }
        s.settle(until);
        out
    }

    #[test]
    fn fires_in_time_order() {
        let mut s = Scheduler::new();
        s.start(&GameConfig::default());
        let fired = drain(&mut s, 60.0);
        assert_eq!(
            fired,
            vec![
                (Task::Fall, 20.0),
                (Task::Fall, 40.0),
                (Task::Collision, 50.0),
                (Task::Fall, 60.0),
            ]
        );
        assert_eq!(s.now_ms(), 60.0);
    }

    #[test]
    fn ties_follow_task_order() {
        let mut s = Scheduler::new();
        s.start(&GameConfig::default());
        let fired = drain(&mut s, 1000.0);
        let at_1000: Vec<Task> = fired
            .iter()
            .filter(|(_, t)| *t == 1000.0)
            .map(|(task, _)| *task)
            .collect();
        assert_eq!(at_1000, vec![Task::Countdown, Task::Fall, Task::Collision]);
    }

    #[test]
    fn cancel_stops_everything() {
        let mut s = Scheduler::new();
        s.start(&GameConfig::default());
        s.cancel_all();
        assert!(!s.any_active());
        assert_eq!(s.pop_due(10_000.0), None);
    }

    #[test]
    fn counts_match_periods() {
        let mut s = Scheduler::new();
        s.start(&GameConfig::default());
        let fired = drain(&mut s, 4000.0);
        let count = |task| fired.iter().filter(|(t, _)| *t == task).count();
        assert_eq!(count(Task::Countdown), 4);
        assert_eq!(count(Task::Spawn), 2);
        assert_eq!(count(Task::Fall), 200);
        assert_eq!(count(Task::Collision), 80);
    }
}
