// src/animation/step_state.rs
//
// Per-node animation state. A node is either idle at a committed value
// (0 or 1) or animating toward the other end, one tick at a time.

use crate::config::AnimationConfig;
use crate::utilities::update_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Idle => 0.0,
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Direction::Idle
    }
}

// The parts of AnimationConfig a node needs to advance itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    pub rects: usize,
    pub step_gap: f32,
    pub scale_divisor: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for StepConfig {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            rects: config.rects,
            step_gap: config.step_gap,
            scale_divisor: config.scale_divisor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepUpdate {
    Idle,
    Progressed(f32),
    Committed(f32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepState {
    progress: f32,
    direction: Direction,
    committed: f32,
}

impl StepState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn committed(&self) -> f32 {
        self.committed
    }

    pub fn is_animating(&self) -> bool {
        !self.direction.is_idle()
    }

    /// Starts animating away from the committed end. Returns false if the
    /// state was already animating.
    pub fn start_updating(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.direction = if 1.0 - 2.0 * self.committed >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        true
    }

    pub fn update(&mut self, config: &StepConfig) -> StepUpdate {
        if !self.is_animating() {
            return StepUpdate::Idle;
        }

        let sign = self.direction.sign();
        self.progress += update_value(
            self.progress,
            sign,
            config.rects,
            config.rects,
            config.scale_divisor,
            config.step_gap,
        );

        if (self.progress - self.committed).abs() > 1.0 {
            self.progress = self.committed + sign;
            self.direction = Direction::Idle;
            self.committed = self.progress;
            return StepUpdate::Committed(self.committed);
        }
        StepUpdate::Progressed(self.progress)
    }
}
