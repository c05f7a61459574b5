//! Polled input state.
//!
//! The runtime feeds window events in as they arrive; game logic polls the
//! state once per fixed update. Edge queries (`*_pressed` / `*_released`)
//! compare against a snapshot taken at the start of each update, so a press
//! reads true for exactly one tick regardless of frame rate.

mod gamepad;
mod state;
mod types;
pub mod platform;

pub use gamepad::{GamepadAxis, GamepadButton, GamepadEvent, GamepadId, GamepadState};
pub use state::InputState;
pub use types::{Key, MouseButton};
