use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::subscription::Subscription;

use super::{Result, SubscriptionStore};

const DEFAULT_DIR_NAME: &str = ".subtrack_core";
const STORE_FILE: &str = "subscriptions.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.subtrack_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SUBTRACK_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// JSON file store with atomic writes.
#[derive(Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store rooted in the given directory, or the default data directory
    /// when `None`.
    pub fn new(root: Option<PathBuf>) -> Self {
        let root = root.unwrap_or_else(app_data_dir);
        Self {
            path: root.join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubscriptionStore for JsonStore {
    /// Loads the saved snapshot. A store that has never been written reads
    /// as an empty list.
    fn load(&self) -> Result<Vec<Subscription>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let subscriptions: Vec<Subscription> = serde_json::from_str(&data)?;
        Ok(subscriptions)
    }

    fn save(&self, subscriptions: &[Subscription]) -> Result<()> {
        let json = serde_json::to_string_pretty(subscriptions)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(count = subscriptions.len(), "saved subscription snapshot");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
