use thiserror::Error;

/// Failure while compiling or validating a render pipeline.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader validation failed: {0}")]
    Validation(String),
}

/// Failure while initializing the GPU device or surface.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to request device: {0}")]
    Device(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
}

/// Failure in the audio backend.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    NoOutput(String),
    #[error("failed to decode audio file {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("failed to read audio file {path}: {reason}")]
    Io { path: String, reason: String },
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
