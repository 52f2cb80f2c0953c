use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::ChirpyError;
use crate::models::{Chirp, RefreshToken, User};

/// Whole-database snapshot: everything the backing file holds.
///
/// Chirps and users are keyed by decimal id; refresh tokens by the SHA-256
/// hex of the raw token. `BTreeMap` keeps the encoded file deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub chirps: BTreeMap<i32, Chirp>,
    pub users: BTreeMap<i32, User>,
    pub refresh_tokens: BTreeMap<String, RefreshToken>,

    /// High-water mark for chirp ids. Deletion leaves a gap and the newest
    /// chirp may itself be deleted, so `max(existing)+1` alone would hand
    /// out an old id again; this counter makes ids strictly increasing over
    /// the life of the document.
    #[serde(default)]
    pub last_chirp_id: i32,
}

impl Document {
    /// Next chirp id: strictly greater than any id ever issued.
    pub fn next_chirp_id(&self) -> i32 {
        let highest = self.chirps.keys().max().copied().unwrap_or(0);
        highest.max(self.last_chirp_id) + 1
    }

    /// Next user id. Users are never deleted, so max+1 cannot collide.
    pub fn next_user_id(&self) -> i32 {
        self.users.keys().max().copied().unwrap_or(0) + 1
    }

    /// Look up a user by email (the unique secondary index).
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

/// Load/write capability over the whole document.
///
/// Every mutating operation is "load full snapshot, mutate in memory, write
/// full snapshot", so the atomicity unit is one full document replace, not a
/// per-record transaction. Two callers interleaving load -> mutate -> write
/// can lose the first caller's change; callers that need stronger guarantees
/// must serialize above this trait. This is an accepted property of the
/// single-file design.
pub trait DocumentStore: Send + Sync {
    /// Read and decode the full backing file.
    fn load(&self) -> Result<Document, ChirpyError>;

    /// Encode and atomically replace the full backing file.
    fn write(&self, doc: &Document) -> Result<(), ChirpyError>;

    /// Truncate to an empty document (test/debug bootstrapping).
    fn reset(&self) -> Result<(), ChirpyError>;
}

/// File-backed [`DocumentStore`]: one JSON file, one global readers-writer
/// lock over the whole document. All collections share the lock, so a write
/// to users blocks concurrent reads of chirps.
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Open the store at `path`, creating the file with an empty document
    /// if it does not exist yet. Idempotent; any other I/O fault is
    /// [`ChirpyError::Storage`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ChirpyError> {
        let store = FileStore {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        };
        store.ensure_initialized()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_initialized(&self) -> Result<(), ChirpyError> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "creating empty document store");
                self.write(&Document::default())
            }
            Err(e) => Err(ChirpyError::Storage(e)),
        }
    }

    /// Encode `doc` into a temp file next to the target, then rename over
    /// it, so the backing file is never left partially written. Owner-only
    /// permissions, matching the rest of the persisted state.
    fn replace_file(&self, doc: &Document) -> Result<(), ChirpyError> {
        let data = serde_json::to_vec(doc).map_err(ChirpyError::Encode)?;

        let tmp = self.path.with_extension("json.tmp");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&tmp)?;
        file.write_all(&data)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document, ChirpyError> {
        let _shared = self
            .lock
            .read()
            .map_err(|_| ChirpyError::Internal("store lock poisoned".to_string()))?;

        let data = fs::read(&self.path)?;
        serde_json::from_slice(&data).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "backing file is malformed");
            ChirpyError::Decode(e)
        })
    }

    fn write(&self, doc: &Document) -> Result<(), ChirpyError> {
        let _exclusive = self
            .lock
            .write()
            .map_err(|_| ChirpyError::Internal("store lock poisoned".to_string()))?;

        self.replace_file(doc)
    }

    fn reset(&self) -> Result<(), ChirpyError> {
        self.write(&Document::default())
    }
}
