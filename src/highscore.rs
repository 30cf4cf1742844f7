//! Persisted high score
//!
//! A single best score, stored as JSON (`{"best": 1050}`) at a path chosen by
//! the caller. Read once at session start, written when a finished session
//! beats it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Create an empty record
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Check if a score would replace the stored one
    pub fn qualifies(&self, score: u32) -> bool {
        self.best == 0 || self.best < score
    }

    /// Store the score if it qualifies. Returns true when the record changed.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Load the record, starting fresh if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(scores) => {
                log::info!("Loaded high score {} from {}", scores.best, path.display());
                scores
            }
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring unreadable high score file: {e:#}");
                } else {
                    log::info!("No high score found, starting fresh");
                }
                Self::new()
            }
        }
    }

    /// Read the record, failing on I/O or parse errors
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("read high score {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parse high score {}", path.display()))
    }

    /// Write the record, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string(self)?;
        fs::write(path, json).with_context(|| format!("write high score {}", path.display()))?;
        log::info!("High score {} saved", self.best);
        Ok(())
    }
}
