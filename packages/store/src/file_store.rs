//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as one file under a base directory. It is
//! used on desktop and mobile platforms to retain the portfolio across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json            # raw value string
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a
//! platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/portfolio-builder/` |
//! | Linux | `~/.local/share/portfolio-builder/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\portfolio-builder\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::PathBuf;

use crate::portfolio::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioStore;

    #[tokio::test]
    async fn file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("portfolio_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = PortfolioStore::new(FileStore::new(dir.clone()));
        let id = store.add_skill("Rust".into(), 88).await;

        // Re-open from the same directory.
        let reopened = PortfolioStore::load(FileStore::new(dir.clone())).await;
        let skill = reopened.data().skills.iter().find(|s| s.id == id).unwrap();
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.proficiency, 88);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let dir = std::env::temp_dir().join(format!("portfolio_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir);
        assert!(store.get("portfolioData").await.is_none());
    }
}
