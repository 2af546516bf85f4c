use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::model::catalog::Catalog;
use crate::domain::repository::{CatalogRepository, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError for JsonStoreError {
    fn is_unreadable(&self) -> bool {
        match self {
            Self::Json(_) => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::InvalidData,
        }
    }
}

/// JSONファイルによるCatalogRepository実装。
/// 1 Catalog = 1 JSONファイル（UTF-8、整形済み）。
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存用の一時ファイル。データファイル名に`.tmp`を付け足したもの。
    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl CatalogRepository for JsonCatalogRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        Ok(Some(catalog))
    }

    /// 一時ファイルに書いてからrenameで置き換える。
    /// 失敗時は一時ファイルを残さない。
    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(catalog)?;
        let tmp = self.temp_path();
        let written =
            std::fs::write(&tmp, &content).and_then(|()| std::fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(
            "saved {} books to {}",
            catalog.len(),
            self.path.display()
        );
        Ok(())
    }
}
