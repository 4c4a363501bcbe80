use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Emplacement clé/valeur opaque, externe au moteur.
pub trait HolidayCache {
    /// Lit la valeur associée à `key` ; `Ok(None)` si absente.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Écrit la valeur ; ré-écrire le même contenu doit rester sans effet.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Un fichier `<key>.json` par clé dans un répertoire.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl HolidayCache for FileCache {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating cache directory {}", self.dir.display()))?;
        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        // rename atomique : le dernier écrivain gagne, contenu identique
        tmp.persist(&path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

/// Cache en mémoire (tests, intégration dans un autre programme).
#[derive(Debug, Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        let cache = Self::default();
        if let Ok(mut slots) = cache.slots.lock() {
            slots.insert(key.into(), value.into());
        }
        cache
    }
}

impl HolidayCache for MemoryCache {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory cache poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory cache poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Aucun cache : lecture toujours vide, écriture ignorée.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl HolidayCache for NoCache {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
