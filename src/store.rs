//! Best-score persistence backed by a small JSON file.
//!
//! The file holds a single object, `{"best": 42}`. A missing or unreadable
//! file simply means there is no stored best yet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::BestScoreStore;

/// Default location, relative to the working directory.
pub const DEFAULT_BEST_FILE: &str = ".blockfall-best.json";

/// Environment variable that overrides [`DEFAULT_BEST_FILE`].
pub const BEST_FILE_ENV: &str = "BLOCKFALL_BEST_FILE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BestRecord {
    best: u32,
}

/// [`BestScoreStore`] that reads and writes a JSON file.
#[derive(Debug, Clone)]
pub struct FileBestScore {
    path: PathBuf,
}

impl FileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$BLOCKFALL_BEST_FILE`, or the default file name.
    pub fn from_env() -> Self {
        match std::env::var_os(BEST_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_BEST_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: BestRecord = serde_json::from_str(&text)?;
        Ok(Some(record.best))
    }

    fn write(&self, best: u32) -> anyhow::Result<()> {
        let text = serde_json::to_string(&BestRecord { best })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl BestScoreStore for FileBestScore {
    fn get(&self) -> Option<u32> {
        match self.read() {
            Ok(best) => best,
            Err(e) => {
                eprintln!("[Store] ignoring {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, best: u32) {
        if let Err(e) = self.write(best) {
            eprintln!("[Store] failed to write {}: {}", self.path.display(), e);
        }
    }
}
