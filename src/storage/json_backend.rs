use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::{LedgerStore, Result};
use crate::ledger::Ledger;

const TMP_SUFFIX: &str = "tmp";

/// Stores a single ledger as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileStore {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn load(&self) -> Result<Option<Ledger>> {
        load_ledger_from_path(&self.path)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Writes the ledger by staging to a `.tmp` sibling and renaming it into place.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::info!(path = %path.display(), "ledger saved");
    Ok(())
}

/// Reads a ledger snapshot; `Ok(None)` when the file does not exist.
pub fn load_ledger_from_path(path: &Path) -> Result<Option<Ledger>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no ledger file to load");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let ledger: Ledger = serde_json::from_str(&data)?;
    ledger.validate()?;
    tracing::info!(path = %path.display(), "ledger loaded");
    Ok(Some(ledger))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
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
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
