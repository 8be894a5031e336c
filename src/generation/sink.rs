//! Where generated documents go. The generation step hands every parsed document to a
//! [`DocumentSink`] together with its name and gets back an identifier of where it ended up.

use crate::error::Result;
use log::info;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub trait DocumentSink {
    fn store(&mut self, name: &str, document: &Value) -> Result<String>;
}

/// Writes `<directory>/<name>.json`, pretty-printed, creating the directory on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        DirectorySink {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DocumentSink for DirectorySink {
    fn store(&mut self, name: &str, document: &Value) -> Result<String> {
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(format!("{}.json", name));
        fs::write(&path, serde_json::to_string_pretty(document)?)?;
        info!("wrote {}", path.display());
        Ok(path.display().to_string())
    }
}

/// Keeps documents in memory, in the order they were stored.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub documents: Vec<(String, Value)>,
}

impl DocumentSink for MemorySink {
    fn store(&mut self, name: &str, document: &Value) -> Result<String> {
        self.documents.push((name.to_string(), document.clone()));
        Ok(format!("memory:{}", name))
    }
}
