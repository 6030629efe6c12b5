//! Persistence of the entry collection.
//!
//! The collection is read once and rewritten in full on every change. The
//! aggregation engine never sees the store; callers load entries and pass
//! them on as plain slices.
//!
//! Loading is permissive: a missing, empty or malformed file (including one
//! that is not UTF-8) is an empty history, and individual records that fail
//! to parse are skipped. [`EntryStore::update`] writes skipped records back
//! untouched after the readable ones; [`EntryStore::save_all`] replaces the
//! whole file and drops them.

use crate::constants::{STORE_FILE_EXTENSION, STORE_LOCK_FILE_NAME, STORE_NAMESPACE};
#[cfg(unix)]
use crate::constants::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
use crate::errors::{AppError, AppResult, LockError, StoreError};
use crate::mood::MoodEntry;
use fs2::FileExt;
use serde_json::Value;
use std::cell::RefCell;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-all / write-all access to the entry collection.
pub trait EntryStore {
    /// Loads every stored entry, in stored order.
    fn load_all(&self) -> AppResult<Vec<MoodEntry>>;

    /// Replaces the stored collection with `entries`.
    fn save_all(&self, entries: &[MoodEntry]) -> AppResult<()>;

    /// Loads, modifies and saves the collection as one step.
    ///
    /// No other writer can change the collection between the load and the
    /// save. Nothing is written if `apply` returns an error.
    fn update<T, F>(&self, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<MoodEntry>) -> AppResult<T>,
        Self: Sized;
}

/// Stores the collection as a JSON array in `<data_dir>/moodEntries.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the JSON file holding the collection.
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", STORE_NAMESPACE, STORE_FILE_EXTENSION))
    }

    fn lock_path(&self) -> PathBuf {
        self.data_dir.join(STORE_LOCK_FILE_NAME)
    }

    /// Takes the exclusive store lock, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `LockError::StoreBusy` while another writer holds the lock.
    pub fn lock(&self) -> AppResult<StoreLock> {
        self.ensure_data_dir()?;
        Ok(StoreLock::acquire(&self.lock_path())?)
    }

    fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.is_absolute() {
            return Err(StoreError::InvalidLocation {
                path: self.data_dir.clone(),
                reason: "data directory must be an absolute path".to_string(),
            }
            .into());
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create data directory: {}", e),
                ))
            })?;

            #[cfg(unix)]
            {
                fs::set_permissions(
                    &self.data_dir,
                    fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS),
                )?;
                debug!("Set 0o700 permissions on data directory");
            }
        }
        Ok(())
    }

    fn read_records(&self) -> AppResult<StoredRecords> {
        let path = self.entries_path();
        match fs::read(&path) {
            Ok(contents) => Ok(StoredRecords::parse(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No entry store at {:?}, starting fresh", path);
                Ok(StoredRecords::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_records(&self, entries: &[MoodEntry], unreadable: &[Value]) -> AppResult<()> {
        let contents = if unreadable.is_empty() {
            serde_json::to_string_pretty(entries)
        } else {
            let mut records = entries
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<Value>, _>>()
                .map_err(StoreError::from)?;
            records.extend_from_slice(unreadable);
            serde_json::to_string_pretty(&records)
        }
        .map_err(StoreError::from)?;

        self.write_atomically(&contents)?;
        debug!(
            "Saved {} mood entries ({} unreadable kept)",
            entries.len(),
            unreadable.len()
        );
        Ok(())
    }

    fn write_atomically(&self, contents: &str) -> AppResult<()> {
        let target = self.entries_path();
        let temp = self
            .data_dir
            .join(format!(".{}-{}.tmp", STORE_NAMESPACE, uuid::Uuid::new_v4()));

        let result = write_new_file(&temp, contents).and_then(|()| {
            fs::rename(&temp, &target)?;
            Ok(())
        });

        if result.is_err() {
            let _ = fs::remove_file(&temp);
        }
        result
    }
}

impl EntryStore for JsonFileStore {
    fn load_all(&self) -> AppResult<Vec<MoodEntry>> {
        let records = self.read_records()?;
        debug!("Loaded {} mood entries", records.entries.len());
        Ok(records.entries)
    }

    fn save_all(&self, entries: &[MoodEntry]) -> AppResult<()> {
        let _lock = self.lock()?;
        self.write_records(entries, &[])
    }

    fn update<T, F>(&self, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<MoodEntry>) -> AppResult<T>,
    {
        let _lock = self.lock()?;
        let StoredRecords {
            mut entries,
            unreadable,
        } = self.read_records()?;

        let result = apply(&mut entries)?;
        self.write_records(&entries, &unreadable)?;
        Ok(result)
    }
}

/// A persisted collection split into readable entries and raw leftovers.
#[derive(Debug, Default)]
struct StoredRecords {
    entries: Vec<MoodEntry>,
    unreadable: Vec<Value>,
}

impl StoredRecords {
    fn parse(contents: &[u8]) -> Self {
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        let records: Vec<Value> = match serde_json::from_slice(contents) {
            Ok(records) => records,
            Err(e) => {
                warn!("Entry store is malformed, treating it as empty: {}", e);
                return Self::default();
            }
        };

        let mut parsed = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<MoodEntry>(record.clone()) {
                Ok(entry) => parsed.entries.push(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry record {}: {}", index, e);
                    parsed.unreadable.push(record);
                }
            }
        }
        parsed
    }
}

/// Parses a persisted collection, dropping whatever cannot be read.
pub fn parse_entries(contents: &[u8]) -> Vec<MoodEntry> {
    StoredRecords::parse(contents).entries
}

fn write_new_file(path: &Path, contents: &str) -> AppResult<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;

    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))?;

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

/// Exclusive advisory lock on the store, released on drop.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
}

impl StoreLock {
    fn acquire(path: &Path) -> Result<Self, LockError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.to_path_buf(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file }),
            Err(e) if is_contended(&e) => Err(LockError::StoreBusy {
                path: path.to_path_buf(),
            }),
            Err(source) => Err(LockError::AcquisitionFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release store lock: {}", e);
        }
    }
}

fn is_contended(error: &std::io::Error) -> bool {
    error.kind() == ErrorKind::WouldBlock
        || error.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

/// Keeps the collection in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<MoodEntry>>,
}

impl MemoryStore {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }

    pub fn snapshot(&self) -> Vec<MoodEntry> {
        self.entries.borrow().clone()
    }
}

impl EntryStore for MemoryStore {
    fn load_all(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.snapshot())
    }

    fn save_all(&self, entries: &[MoodEntry]) -> AppResult<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }

    fn update<T, F>(&self, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<MoodEntry>) -> AppResult<T>,
    {
        let mut entries = self.snapshot();
        let result = apply(&mut entries)?;
        *self.entries.borrow_mut() = entries;
        Ok(result)
    }
}
