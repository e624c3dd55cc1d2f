//! Timestamped output file naming.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

/// `<action>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn timestamped_name<Tz: TimeZone>(action: &str, ext: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.{}", action, now.format("%Y%m%d_%H%M%S"), ext)
}

/// Directory that receives saved plots and audio
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::new(".")
    }
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for a new file stamped with the current local time
    pub fn path_for(&self, action: &str, ext: &str) -> PathBuf {
        self.root.join(timestamped_name(action, ext, &Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_timestamped_name_format() {
        let when = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(
            timestamped_name("plot_fft", "png", &when),
            "plot_fft_20240307_090502.png"
        );
    }

    #[test]
    fn test_path_for_uses_root_and_prefix() {
        let dir = OutputDir::new("/tmp/out");
        let path = dir.path_for("play_sound", "wav");

        assert_eq!(path.parent(), Some(Path::new("/tmp/out")));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("play_sound_"));
        assert!(name.ends_with(".wav"));
        // play_sound_ + 8 digits + _ + 6 digits + .wav
        assert_eq!(name.len(), "play_sound_".len() + 15 + ".wav".len());
    }
}
