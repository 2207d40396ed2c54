use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

const EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// One file per key under a directory. Writes land in a temporary sibling first
/// and are renamed into place, so a crash never leaves a half-written record.
pub(crate) struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub(crate) fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub(crate) fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", canonical_key(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => {
                tracing::debug!(path = %path.display(), bytes = data.len(), "read key");
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "default".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(format!("{EXTENSION}.{TMP_SUFFIX}"));
    tmp
}
