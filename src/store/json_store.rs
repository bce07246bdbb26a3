use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::store::schema::ProgressRecord;

const PROGRESS_FILE: &str = "progress.json";

/// File-backed progress store. One JSON file, always written whole.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wonderland");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn file_path(&self) -> PathBuf {
        self.base_dir.join(PROGRESS_FILE)
    }

    /// Load the progress record. An absent file, an unreadable file, and
    /// unparsable JSON all yield the default record; fields the file does
    /// supply override defaults field by field (serde defaults on the schema).
    pub fn load(&self) -> ProgressRecord {
        let path = self.file_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => ProgressRecord::default(),
            }
        } else {
            ProgressRecord::default()
        }
    }

    /// Write the whole record atomically: .tmp, fsync, rename.
    pub fn save(&self, record: &ProgressRecord) -> Result<()> {
        let path = self.file_path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(record)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Delete the stored record entirely. Absence is not an error; the caller
    /// is expected to restart the session so all state re-derives from
    /// defaults.
    pub fn reset(&self) -> Result<()> {
        let path = self.file_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn record_exists(&self) -> bool {
        self.file_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::Chapter;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn load_without_file_yields_defaults() {
        let (_dir, store) = make_test_store();
        assert!(!store.record_exists());
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let (_dir, store) = make_test_store();

        let mut record = ProgressRecord::default();
        record.unlock();
        record.hint1_opened = true;
        record.hint2_opened = true;
        store.save(&record).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, record);
        assert_eq!(loaded.game.chapter, Chapter::Soon);
    }

    #[test]
    fn corrupted_file_yields_defaults() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(), "not json {{{").unwrap();
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn mistyped_field_yields_defaults() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(), r#"{"prologueUnlocked":"yes"}"#).unwrap();
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(), r#"{"hint2Opened":true}"#).unwrap();

        let loaded = store.load();
        assert!(loaded.hint2_opened);
        assert!(!loaded.hint1_opened);
        assert!(!loaded.prologue_unlocked);
        assert_eq!(loaded.game.chapter, Chapter::Prologue);
    }

    #[test]
    fn save_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.save(&ProgressRecord::default()).unwrap();

        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn reset_removes_the_record() {
        let (_dir, store) = make_test_store();
        store.save(&ProgressRecord::default()).unwrap();
        assert!(store.record_exists());

        store.reset().unwrap();
        assert!(!store.record_exists());
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn reset_without_record_is_ok() {
        let (_dir, store) = make_test_store();
        store.reset().unwrap();
    }
}
