//! Sound effect and music playback.
//!
//! A missing audio device downgrades to a no-op backend with a warning, so
//! headless machines still run the rest of the engine.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::source::Source;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::AudioError;

/// Audio output with one looping music channel and fire-and-forget effects.
///
/// File bytes are cached per path; every play decodes from the cached buffer.
pub struct Audio {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    effects: Vec<Sink>,
    music: Option<Sink>,
    volume: f32,
    cache: HashMap<PathBuf, Arc<[u8]>>,
}

impl Audio {
    /// Opens the default output device. If none is available the instance
    /// still works, it just plays nothing.
    pub fn new() -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok((s, h)) => (Some(s), Some(h)),
            Err(e) => {
                log::warn!("no audio output device, sound disabled: {e}");
                (None, None)
            }
        };
        if handle.is_some() {
            log::info!("audio output initialized");
        }
        Self {
            _stream: stream,
            handle,
            effects: Vec::new(),
            music: None,
            volume: 1.0,
            cache: HashMap::new(),
        }
    }

    /// Plays a one-shot sound effect at the current volume.
    pub fn play_effect(&mut self, path: &Path) -> Result<(), AudioError> {
        let bytes = self.load(path)?;
        let Some(handle) = self.handle.as_ref() else {
            return Ok(());
        };
        let source = Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let sink = Sink::try_new(handle).map_err(|e| AudioError::NoOutput(e.to_string()))?;
        sink.set_volume(self.volume);
        sink.append(source);
        self.effects.push(sink);
        Ok(())
    }

    /// Starts looping music, replacing whatever was playing.
    pub fn play_music(&mut self, path: &Path) -> Result<(), AudioError> {
        let bytes = self.load(path)?;
        let Some(handle) = self.handle.as_ref() else {
            return Ok(());
        };
        let source = Decoder::new(Cursor::new(bytes))
            .map_err(|e| AudioError::Decode {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
            .repeat_infinite();
        let sink = Sink::try_new(handle).map_err(|e| AudioError::NoOutput(e.to_string()))?;
        sink.set_volume(self.volume);
        sink.append(source);
        if let Some(old) = self.music.replace(sink) {
            old.stop();
        }
        Ok(())
    }

    pub fn pause_music(&self) {
        if let Some(m) = &self.music {
            m.pause();
        }
    }

    pub fn resume_music(&self) {
        if let Some(m) = &self.music {
            m.play();
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(m) = self.music.take() {
            m.stop();
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music
            .as_ref()
            .map(|m| !m.is_paused() && !m.empty())
            .unwrap_or(false)
    }

    /// Master volume in 0..1, applied to music immediately and to effects on
    /// their next play.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(m) = &self.music {
            m.set_volume(self.volume);
        }
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Drops finished effect sinks. Called once per frame by the runtime.
    pub fn update(&mut self) {
        self.effects.retain(|s| !s.empty());
    }

    fn load(&mut self, path: &Path) -> Result<Arc<[u8]>, AudioError> {
        if let Some(bytes) = self.cache.get(path) {
            return Ok(bytes.clone());
        }
        log::info!("loading audio from {}", path.display());
        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|e| AudioError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
            .into();
        self.cache.insert(path.to_path_buf(), bytes.clone());
        Ok(bytes)
    }
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}
