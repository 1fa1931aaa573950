//! Best score persistence
//!
//! The score file holds one integer on its first line. Anything that can't
//! be read counts as a best score of 0.

use std::fs;
use std::path::PathBuf;

/// Default score file, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "scores.txt";

/// Somewhere the best score lives between runs
pub trait ScoreStore {
    /// Read the stored best score, 0 when there is none
    fn load(&self) -> u32;

    /// Replace the stored best score
    fn save(&mut self, score: u32) -> Result<(), String>;
}

/// Best score kept in a plain text file
#[derive(Debug, Clone)]
pub struct BestScoreFile {
    path: PathBuf,
}

impl BestScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for BestScoreFile {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

impl ScoreStore for BestScoreFile {
    fn load(&self) -> u32 {
        match fs::read(&self.path) {
            Ok(contents) => {
                let best = parse_score(&contents);
                log::info!("Best score {} loaded from {}", best, self.path.display());
                best
            },
            Err(e) => {
                log::info!(
                    "No best score at {} ({}), starting from 0",
                    self.path.display(),
                    e
                );
                0
            },
        }
    }

    fn save(&mut self, score: u32) -> Result<(), String> {
        fs::write(&self.path, format!("{}\n", score))
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

/// Parse the first line the way C's `atoi` would: skip leading whitespace,
/// read the leading digits, ignore the rest. Bytes after the digits need not
/// be valid UTF-8. Negative or missing numbers give 0.
pub fn parse_score(contents: &[u8]) -> u32 {
    let line = contents.split(|&b| b == b'\n').next().unwrap_or_default();
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let line = &line[start..];
    let line = line.strip_prefix(b"+").unwrap_or(line);
    let digits = line.iter().take_while(|b| b.is_ascii_digit()).count();
    std::str::from_utf8(&line[..digits])
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// In-memory store, handy when no file should be touched
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
    /// Number of successful saves
    pub saves: usize,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) -> Result<(), String> {
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}
