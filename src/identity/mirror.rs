//! Durable key-value mirror for the active session.
//! One file per key under `<data_root>/session/`, written whole and read
//! only at startup. Last writer wins; there is no locking discipline beyond
//! that because only the session store ever touches these files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const KEY_AUTH_USER: &str = "authUser";
pub const KEY_USER_TYPE: &str = "userType";

#[derive(Debug, Clone)]
pub struct SessionMirror {
    root: PathBuf,
}

impl SessionMirror {
    pub fn new<P: AsRef<Path>>(data_root: P) -> Self {
        Self { root: data_root.as_ref().join("session") }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read a key. Missing file is Ok(None); an unreadable file is an error
    /// the caller decides how to treat.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading session mirror entry {}", path.display()))?;
        Ok(Some(s))
    }

    /// Write a key, creating the mirror directory on first use.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("creating session mirror root {}", self.root.display()))?;
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("writing session mirror entry {}", path.display()))?;
        Ok(())
    }

    /// Delete a key; deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing session mirror entry {}", path.display())),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove_cycle() {
        let tmp = tempfile::tempdir().unwrap();
        let m = SessionMirror::new(tmp.path());
        assert_eq!(m.read(KEY_AUTH_USER).unwrap(), None);
        m.write(KEY_AUTH_USER, "{\"x\":1}").unwrap();
        assert_eq!(m.read(KEY_AUTH_USER).unwrap().as_deref(), Some("{\"x\":1}"));
        assert!(m.contains(KEY_AUTH_USER));
        m.remove(KEY_AUTH_USER).unwrap();
        assert!(!m.contains(KEY_AUTH_USER));
        // removing again stays quiet
        m.remove(KEY_AUTH_USER).unwrap();
    }
}
