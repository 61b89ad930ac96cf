use crate::api::AddrBookApi;
use crate::config::AddrBookConfig;
use crate::store::fs::FileStore;
use crate::store::load_or_default;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const FALLBACK_DIR: &str = ".addrbook";

pub struct AddrBookContext {
    pub api: AddrBookApi<FileStore>,
}

/// Where the books live: an explicit directory if given, else the platform data
/// directory, else `.addrbook` under `cwd`.
pub fn resolve_data_dir(explicit: Option<PathBuf>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(FALLBACK_DIR))
}

pub fn initialize(data_dir: PathBuf) -> AddrBookContext {
    tracing::debug!(data_dir = %data_dir.display(), "opening address book");
    let config = load_or_default("config", AddrBookConfig::load(&data_dir));
    let store = FileStore::new(data_dir.clone());
    let api = AddrBookApi::open(store, config, data_dir);
    AddrBookContext { api }
}
