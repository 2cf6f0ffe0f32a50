pub mod animator;
pub mod step_state;

pub use animator::AnimationTimer;
pub use step_state::{Direction, StepConfig, StepState, StepUpdate};
