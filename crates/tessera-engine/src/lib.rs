//! Tessera engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by higher layers:
//! windowed render loop, sprite batching, glyph text, polled input, audio,
//! and the scene contract driving them.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod audio;
pub mod logging;
pub mod coords;
pub mod error;
pub mod render;
pub mod sprite;
pub mod text;
