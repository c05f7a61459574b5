use crate::coords::ColorRgb;

/// Startup configuration for an application.
///
/// Applications typically seed this from persisted options before calling
/// [`crate::window::App::run`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in logical pixels.
    pub window_dims: (u32, u32),
    /// Start in borderless fullscreen.
    pub fullscreen: bool,
    /// Clear color for every frame.
    pub clear_color: ColorRgb,
    /// Master audio volume in 0..1.
    pub volume: f32,
    /// Logic updates per second for the fixed timestep.
    pub target_ups: f32,
    /// Cap on full update steps per rendered frame.
    pub max_updates_per_frame: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tessera".to_string(),
            window_dims: (800, 600),
            fullscreen: false,
            clear_color: ColorRgb::black(),
            volume: 1.0,
            target_ups: 60.0,
            max_updates_per_frame: 10,
        }
    }
}
