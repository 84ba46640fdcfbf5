use std::time::Duration;

use crate::games::snake::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
    Paused,
}

/// Tick schedule of one session. The clock only records whether ticks are due
/// and at what period; the session actor turns it into a timer and re-arms
/// that timer whenever `epoch` changes.
#[derive(Clone, Debug)]
pub struct GameClock {
    state: ClockState,
    period: Option<Duration>,
    epoch: u64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            state: ClockState::Stopped,
            period: None,
            epoch: 0,
        }
    }

    pub fn start(&mut self, difficulty: Difficulty) {
        self.state = ClockState::Running;
        self.period = Some(difficulty.tick_interval());
        self.epoch += 1;
    }

    pub fn pause(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.state = ClockState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != ClockState::Paused {
            return false;
        }
        self.state = ClockState::Running;
        self.epoch += 1;
        true
    }

    pub fn stop(&mut self) {
        if self.state == ClockState::Stopped {
            return;
        }
        self.state = ClockState::Stopped;
        self.period = None;
        self.epoch += 1;
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Tick period while running; `None` otherwise.
    pub fn active_period(&self) -> Option<Duration> {
        if self.is_running() { self.period } else { None }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_runs_at_difficulty_period() {
        let mut clock = GameClock::new();
        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.active_period(), None);

        clock.start(Difficulty::Medium);
        assert!(clock.is_running());
        assert_eq!(clock.active_period(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = GameClock::new();
        assert!(!clock.pause());
        assert!(!clock.resume());

        clock.start(Difficulty::Hard);
        let started_epoch = clock.epoch();

        assert!(clock.pause());
        assert_eq!(clock.state(), ClockState::Paused);
        assert_eq!(clock.active_period(), None);
        assert!(!clock.pause());

        assert!(clock.resume());
        assert_eq!(clock.active_period(), Some(Duration::from_millis(100)));
        assert!(clock.epoch() > started_epoch);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut clock = GameClock::new();
        clock.start(Difficulty::Easy);
        clock.stop();
        assert_eq!(clock.state(), ClockState::Stopped);
        assert!(!clock.resume());
        assert_eq!(clock.active_period(), None);

        let epoch = clock.epoch();
        clock.stop();
        assert_eq!(clock.epoch(), epoch);
    }
}
