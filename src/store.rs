use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::model::{AttendanceRecord, LeaveRequest, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access collection `{name}`")]
    Io {
        name: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode collection `{name}`")]
    Encode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A named, whole-replaceable sequence of records backed by one JSON file.
///
/// There is no partial or indexed access: every read deserializes the whole
/// file and every save overwrites it. A per-collection mutex makes the
/// load-modify-save cycle of [`Collection::update`] atomic within this
/// process. Writers in other processes still race last-write-wins; that
/// limitation is inherited from the storage model, not fixed here.
pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(root: &Path, name: &'static str) -> Self {
        Self {
            name,
            path: root.join(format!("{name}.json")),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Reads the entire collection. An absent or unreadable file degrades
    /// to an empty list: losing a collection must never take the service
    /// down, only its history.
    pub fn load(&self) -> Vec<T> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read()
    }

    /// Replaces the entire collection.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.write(records)
    }

    /// Load-modify-save under the collection lock. When the closure fails
    /// nothing is written, so a rejected precondition leaves the file
    /// untouched.
    pub fn update<R, E>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.read();
        let out = f(&mut records)?;
        self.write(&records)?;
        Ok(out)
    }

    fn read(&self) -> Vec<T> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(collection = self.name, error = %e, "unreadable collection, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!(collection = self.name, error = %e, "corrupt collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Encode {
            name: self.name,
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            name: self.name,
            source,
        })
    }
}

/// The three named collections of the system, rooted in one data directory.
/// Handed to every service as shared app data; no service owns exclusive
/// access.
pub struct Store {
    pub users: Collection<User>,
    pub attendance: Collection<AttendanceRecord>,
    pub leave_requests: Collection<LeaveRequest>,
}

impl Store {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root).map_err(|source| StoreError::Io {
            name: "store",
            source,
        })?;
        Ok(Self {
            users: Collection::new(root, "users"),
            attendance: Collection::new(root, "attendance"),
            leave_requests: Collection::new(root, "leave_requests"),
        })
    }
}
