use tempfile::TempDir;

use crate::config::Config;
use crate::store::FileStore;

/// A test fixture: a [`FileStore`] backed by a fresh temp directory, plus a
/// matching [`Config`]. The directory (and the backing file) is removed
/// when the fixture drops.
///
/// ```rust
/// use chirpy_core::TestStore;
/// use chirpy_core::repo::chirps;
///
/// let fixture = TestStore::new();
/// let chirp = chirps::create_chirp(&fixture.store, "hello", 1).unwrap();
/// assert_eq!(chirp.id, 1);
/// ```
pub struct TestStore {
    pub store: FileStore,
    pub config: Config,
    _dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("database.json");
        let store = FileStore::open(&path).expect("failed to open test store");

        let config = Config {
            database_path: path.to_string_lossy().into_owned(),
            jwt_secret: "test-secret-key-for-testing".to_string(),
            jwt_expiry_secs: 3600,
            refresh_token_expiry_days: 60,
            polka_api_key: "test-polka-key".to_string(),
            environment: "test".to_string(),
        };

        TestStore {
            store,
            config,
            _dir: dir,
        }
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
