use std::{fs, path::PathBuf};

use fractic_server_error::{CriticalError, ServerError};
use tracing::debug;

use crate::{
    data::models::debt_model::DebtModel,
    errors::{InvalidStoredDebts, ReadError, WriteError},
};

pub(crate) trait DebtsJsonDatasource {
    /// `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<DebtModel>>, ServerError>;

    fn write(&self, debts: &[DebtModel]) -> Result<(), ServerError>;
}

/// Keeps the whole collection as one JSON array in a single file.
pub(crate) struct DebtsJsonDatasourceImpl {
    path: PathBuf,
}

impl DebtsJsonDatasourceImpl {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DebtsJsonDatasource for DebtsJsonDatasourceImpl {
    fn read(&self) -> Result<Option<Vec<DebtModel>>, ServerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored debts yet");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| ReadError::with_debug(&e))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| InvalidStoredDebts::with_debug(&self.path_str(), &e))
    }

    fn write(&self, debts: &[DebtModel]) -> Result<(), ServerError> {
        let json = serde_json::to_string_pretty(debts)
            .map_err(|e| CriticalError::with_debug("failed to serialize debts", &e))?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| WriteError::with_debug(&self.path_str(), &e))?;
        }
        // Write then rename, so the stored file is always a complete array.
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| WriteError::with_debug(&self.path_str(), &e))?;
        fs::rename(&tmp, &self.path).map_err(|e| WriteError::with_debug(&self.path_str(), &e))?;
        debug!(path = %self.path.display(), count = debts.len(), "stored debts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wb_debts.json");
        let ds = DebtsJsonDatasourceImpl::new(&path);
        assert!(ds.read().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(ds.read().unwrap().is_none());
    }

    #[test]
    fn write_creates_parent_dirs_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wb_debts.json");
        let ds = DebtsJsonDatasourceImpl::new(&path);
        ds.write(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
        assert!(!ds.tmp_path().exists());
        assert_eq!(ds.read().unwrap().map(|v| v.len()), Some(0));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wb_debts.json");
        fs::write(&path, r#"{"not": "a list"}"#).unwrap();
        assert!(DebtsJsonDatasourceImpl::new(&path).read().is_err());
    }
}
