//! Frame timing and the fixed update step.

mod frame_clock;
mod step;

pub use frame_clock::{FrameClock, FrameTime};
pub use step::{StepPlan, Timestep};
