//! Persistent user options, stored as `key:value` lines in a text file.

use std::fs;
use std::path::Path;

/// Where the options file lives, relative to the working directory.
pub const OPTIONS_PATH: &str = "options.txt";

/// Settings the options screen edits and the app restores on startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub window_dims: (u32, u32),
    pub fullscreen: bool,
    pub volume: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window_dims: (800, 600),
            fullscreen: false,
            volume: 1.0,
        }
    }
}

impl Options {
    /// Reads options from `path`. A missing file is seeded with the defaults;
    /// malformed lines are skipped.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::info!("no options file at {}, writing defaults ({e})", path.display());
                let options = Self::default();
                options.save(path);
                return options;
            }
        };
        Self::parse(&text)
    }

    /// Writes the options back to `path`. Failure is logged, not fatal.
    pub fn save(&self, path: &Path) {
        if let Err(e) = fs::write(path, self.serialize()) {
            log::error!("failed to save options to {}: {e}", path.display());
        }
    }

    fn parse(text: &str) -> Self {
        let mut options = Self::default();
        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "window_dims" => {
                    if let Some(dims) = parse_dims(value) {
                        options.window_dims = dims;
                    }
                }
                "fullscreen" => {
                    if let Ok(flag) = value.parse::<i32>() {
                        options.fullscreen = flag != 0;
                    }
                }
                "volume" => {
                    if let Ok(volume) = value.parse::<f32>() {
                        options.volume = volume.clamp(0.0, 1.0);
                    }
                }
                _ => {}
            }
        }
        options
    }

    fn serialize(&self) -> String {
        format!(
            "window_dims:{}x{}\nfullscreen:{}\nvolume:{}\n",
            self.window_dims.0,
            self.window_dims.1,
            self.fullscreen as u8,
            self.volume,
        )
    }
}

/// Parses a `WxH` pair like `800x600`.
pub fn parse_dims(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.split_once('x')?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    Some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text() {
        let options = Options {
            window_dims: (1920, 1080),
            fullscreen: true,
            volume: 0.5,
        };
        assert_eq!(Options::parse(&options.serialize()), options);
    }

    #[test]
    fn malformed_lines_fall_back_to_defaults() {
        let parsed = Options::parse("window_dims:12wide\nfullscreen:maybe\nnoise\nvolume:0.25\n");
        assert_eq!(parsed.window_dims, (800, 600));
        assert!(!parsed.fullscreen);
        assert_eq!(parsed.volume, 0.25);
    }

    #[test]
    fn saves_and_loads_from_disk() {
        let path =
            std::env::temp_dir().join(format!("tessera-options-{}.txt", std::process::id()));
        let options = Options {
            window_dims: (1080, 720),
            fullscreen: true,
            volume: 0.75,
        };
        options.save(&path);
        assert_eq!(Options::load(&path), options);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn parses_dims_pairs() {
        assert_eq!(parse_dims("1080x720"), Some((1080, 720)));
        assert_eq!(parse_dims("1080"), None);
        assert_eq!(parse_dims("x600"), None);
    }
}
