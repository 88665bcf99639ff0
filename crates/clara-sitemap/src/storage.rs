use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

pub trait Store {
    type Error: std::error::Error;

    fn store_sitemap(&self, path: &Path, xml: &str) -> Result<(), Self::Error>;
}

/// Writes output files below a root directory.
pub struct DiskStorage {
    output_path: PathBuf,
}

impl DiskStorage {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl Store for DiskStorage {
    type Error = io::Error;

    fn store_sitemap(&self, path: &Path, xml: &str) -> Result<(), Self::Error> {
        let output_path = self.output_path.join(path);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut output_file = File::create(&output_path)?;

        output_file.write_all(xml.as_bytes())?;
        output_file.flush()?;

        Ok(())
    }
}

/// Keeps output files in memory, keyed by their path.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    storage: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl InMemoryStorage {
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.storage.read().ok()?.get(path.as_ref()).cloned()
    }
}

#[derive(Error, Debug)]
pub enum InMemoryStorageError {
    #[error("poisoned")]
    Poisoned,
}

impl Store for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn store_sitemap(&self, path: &Path, xml: &str) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(path.to_owned(), xml.to_string());

        Ok(())
    }
}
