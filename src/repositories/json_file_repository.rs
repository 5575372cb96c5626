use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// Default file name, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "addressbook.json";

/// On-disk layout for writing: `{"version": 1, "records": [...]}`
#[derive(Debug, Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

/// On-disk layout for reading
#[derive(Debug, Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Address book repository backed by a single JSON file.
///
/// Saves go through a sibling temporary file that is renamed into place, so
/// an interrupted write never leaves a truncated store behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the store. `Ok(None)` means there is no file yet.
    fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        let stored: StoredBook = serde_json::from_slice(&contents)?;
        if stored.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }

        Ok(Some(stored.records.into_iter().collect()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> AddressBook {
        match self.try_load() {
            Ok(Some(book)) => {
                info!(path = %self.path.display(), records = book.len(), "Address book loaded");
                book
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No stored address book, starting empty");
                AddressBook::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored address book is unreadable, starting empty");
                AddressBook::new()
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let stored = StoredBookRef {
            version: STORAGE_VERSION,
            records: book.sorted_records(),
        };
        let json = serde_json::to_vec_pretty(&stored)?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut john = Record::named("john").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("0987654321").unwrap();
        john.add_birthday("12.06.1990").unwrap();

        let jane = Record::named("jane").unwrap();

        vec![john, jane].into_iter().collect()
    }

    #[test]
    fn test_default_path() {
        let repo = JsonFileRepository::default();
        assert_eq!(repo.path(), Path::new("addressbook.json"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        let book = sample_book();

        repo.save(&book).unwrap();
        let loaded = repo.load();

        assert_eq!(loaded, book);
        let john = loaded.find("john").unwrap();
        assert_eq!(john.phones().len(), 2);
        assert_eq!(john.birthday().unwrap().to_string(), "12.06.1990");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        repo.save(&sample_book()).unwrap();
        repo.save(&AddressBook::new()).unwrap();

        assert!(repo.load().is_empty());
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/deeper/book.json"));

        repo.save(&sample_book()).unwrap();
        assert_eq!(repo.load().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, b"\x80\x03not json at all").unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"["just", "a", "list"]"#).unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_invalid_phone_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"version":1,"records":[{"name":"Ann","phones":[5551234567]}]}"#,
        )
        .unwrap();

        let repo = JsonFileRepository::new(path);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_unsupported_version_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"version":99,"records":[]}"#).unwrap();

        let repo = JsonFileRepository::new(path.clone());
        assert!(matches!(
            repo.try_load(),
            Err(StorageError::UnsupportedVersion(99))
        ));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_directory_path_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_saved_json_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let repo = JsonFileRepository::new(path.clone());

        let mut ann = Record::named("ann").unwrap();
        ann.add_phone("1111111111").unwrap();
        let book: AddressBook = vec![ann].into_iter().collect();
        repo.save(&book).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "Ann");
        assert_eq!(value["records"][0]["phones"][0], "1111111111");
        assert!(value["records"][0].get("birthday").is_none());
    }
}
