//! Application contracts: configuration, scenes, and the per-frame context.

mod config;
mod ctx;
mod scene;

pub use config::AppConfig;
pub use ctx::Ctx;
pub use scene::{Scene, SceneControl, SceneId};
