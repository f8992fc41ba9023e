//! Per-account watermark persistence.
//!
//! A single JSON file maps account name to the largest tweet ID already
//! processed. Read once before a run, written back only after the run fully
//! succeeded, so a crash never advances the watermark; re-downloading a few
//! images on the next run is the accepted cost.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// On-disk map of account name to last-seen tweet ID.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Ledger {
    /// Read the ledger, creating an empty one (and its parent directory)
    /// when the file does not exist yet.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, "{}")?;
        }

        let content = fs::read_to_string(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Last-seen tweet ID for an account. Absent means no prior run.
    pub fn watermark(&self, account: &str) -> Option<String> {
        self.entries.get(account).cloned()
    }

    /// Replace the account's watermark in memory; [`Ledger::write`] persists.
    pub fn set_watermark(&mut self, account: &str, tweet_id: String) {
        self.entries.insert(account.to_string(), tweet_id);
    }

    /// Persist the ledger, pretty-printed.
    pub fn write(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
