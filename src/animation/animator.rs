// src/animation/animator.rs
//
// Fixed-interval tick scheduler. Frame time is fed in with advance() and
// take_tick() hands out one tick per elapsed interval while running.

use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AnimationTimer {
    running: bool,
    interval: Duration,
    elapsed: Duration,
}

impl AnimationTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when the timer was idle and has just started, meaning the
    /// host should begin redrawing. The first tick is due immediately.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.elapsed = self.interval;
        debug!("animation timer started");
        true
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.elapsed = Duration::ZERO;
            debug!("animation timer stopped");
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.running {
            self.elapsed += dt;
        }
    }

    pub fn take_tick(&mut self) -> bool {
        if self.running && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}
