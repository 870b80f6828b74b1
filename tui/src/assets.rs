//! Startup assets: the cue sounds and the keyboard illustration.
//!
//! Everything is acquired once, before the main loop starts, and lives as
//! long as the [`Assets`] bundle does.

use crate::sounds::SoundBank;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory the assets are loaded from, relative to the working directory.
pub const ASSETS_DIR: &str = "assets";

/// The workspace's own asset directory, used when the working directory has none.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets");

const KEYBOARD_ART: &str = "keyboard.txt";

/// Error type for asset and audio acquisition.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no audio output device: {0}")]
    AudioDevice(#[from] rodio::StreamError),
}

/// Pick the asset directory: `assets/` under the working directory if it
/// exists, the bundled one otherwise.
pub fn locate_dir() -> PathBuf {
    let local = Path::new(ASSETS_DIR);
    if local.join(KEYBOARD_ART).is_file() {
        local.to_path_buf()
    } else {
        PathBuf::from(BUNDLED_ASSETS_DIR)
    }
}

/// Text art of the QWER/ASD keys shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardArt {
    pub lines: Vec<String>,
}

impl KeyboardArt {
    pub fn parse(contents: &str) -> Self {
        let mut lines: Vec<String> = contents.lines().map(|l| l.trim_end().to_string()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    /// Width in terminal columns of the widest line.
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

/// Everything acquired at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    pub sounds: SoundBank,
    pub keyboard: KeyboardArt,
}

impl Assets {
    /// Load the keyboard art from `dir` and synthesize the cue sounds.
    /// A missing art file is an error.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let art_path = dir.join(KEYBOARD_ART);
        let art = std::fs::read_to_string(&art_path).map_err(|source| AssetError::Io {
            path: art_path.clone(),
            source,
        })?;

        tracing::info!(dir = %dir.display(), "assets loaded");
        Ok(Self {
            sounds: SoundBank::synthesize(),
            keyboard: KeyboardArt::parse(&art),
        })
    }
}
