//! Order record persistence.
//!
//! The order store is a single-record file: each successful submission
//! overwrites the previous one. No history is retained; callers must
//! not assume otherwise. The trait seam is where an append-log
//! implementation would slot in if that ever changes.

use crate::store::lock;
use crate::StoreError;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use trove_commerce::inquiry::OrderRequest;

/// Storage seam for the order intake record.
pub trait OrderRecordStore: Send + Sync {
    /// Persist the order, replacing any previously stored record.
    fn save(&self, order: &OrderRequest) -> Result<(), StoreError>;

    /// The most recently stored record, if any.
    fn load_last(&self) -> Result<Option<OrderRequest>, StoreError>;
}

impl<T: OrderRecordStore + ?Sized> OrderRecordStore for std::sync::Arc<T> {
    fn save(&self, order: &OrderRequest) -> Result<(), StoreError> {
        (**self).save(order)
    }

    fn load_last(&self) -> Result<Option<OrderRequest>, StoreError> {
        (**self).load_last()
    }
}

/// JSON-file-backed single-record order store.
#[derive(Debug, Clone)]
pub struct JsonOrderStore {
    path: PathBuf,
}

impl JsonOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl OrderRecordStore for JsonOrderStore {
    fn save(&self, order: &OrderRequest) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(order).map_err(|e| StoreError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Write(format!("{}: {}", parent.display(), e)))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json)
            .map_err(|e| StoreError::Write(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    fn load_last(&self) -> Result<Option<OrderRequest>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| StoreError::Malformed(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }
}

/// In-memory order store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    last: Mutex<Option<OrderRequest>>,
    fail_next_save: Mutex<bool>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `save` return a write error.
    pub fn fail_next_save(&self) {
        *lock(&self.fail_next_save) = true;
    }
}

impl OrderRecordStore for MemoryOrderStore {
    fn save(&self, order: &OrderRequest) -> Result<(), StoreError> {
        let mut fail = lock(&self.fail_next_save);
        if *fail {
            *fail = false;
            return Err(StoreError::Write("injected save failure".to_string()));
        }
        *lock(&self.last) = Some(order.clone());
        Ok(())
    }

    fn load_last(&self) -> Result<Option<OrderRequest>, StoreError> {
        Ok(lock(&self.last).clone())
    }
}
