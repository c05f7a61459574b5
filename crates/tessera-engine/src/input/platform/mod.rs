//! Platform event intake.

mod winit;

pub use winit::apply_window_event;
