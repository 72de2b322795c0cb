use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::chain::{ContractError, storage::KeyValueStore};

/// Directory-backed store: one file per key, named by the hex of the key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ContractError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            ContractError::StorageError(format!(
                "failed to create store directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &[u8]) -> PathBuf {
        self.root.join(hex::encode(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, ContractError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContractError::StorageError(format!(
                "failed to read key {}: {}",
                hex::encode(key),
                e
            ))),
        }
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), ContractError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        // replace atomically
        fs::write(&tmp, &value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                ContractError::StorageError(format!(
                    "failed to write key {}: {}",
                    hex::encode(key),
                    e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set(b"admin", vec![1, 2, 3]).unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(b"admin").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get(b"missing").unwrap(), None);
        assert!(dir.path().join("61646d696e").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();
        store.set(b"k", vec![1]).unwrap();
        store.set(b"k", vec![2]).unwrap();
        assert_eq!(store.get(b"k").unwrap(), Some(vec![2]));
    }
}
