//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the session token in a single file named after
//! [`APP_TOKEN`] inside a base directory. Native builds use it so a session
//! survives restarts the same way `localStorage` does in the browser.
//!
//! ## Platform data directories
//!
//! [`FileStore::default_location`] resolves the base through [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/hr-workspace/` |
//! | Linux | `~/.local/share/hr-workspace/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\hr-workspace\` |

use std::path::{Path, PathBuf};

use crate::token::{non_empty, StoreError, TokenStore, APP_TOKEN};

const APP_DIR: &str = "hr-workspace";

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted in the platform data directory, or the working directory
    /// when none is known.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(APP_TOKEN)
    }
}

impl TokenStore for FileStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok();
        non_empty(content.map(|c| c.trim().to_string()))
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::write(self.token_path(), token).map_err(|e| StoreError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove(e.to_string())),
        }
    }
}
