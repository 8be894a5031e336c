//! File-system side of the crate: finding documents, loading them and the catalog,
//! and rendering a set of files.
use crate::error::{PdeError, Result};
use crate::generation::prompt::CatalogEntry;
use crate::pde::document::Document;
use crate::pde::report::render_document;
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `*.json` files directly inside `dir`, sorted by file name.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PdeError::missing(dir));
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    Ok(files)
}

/// file name, used as the document title when `metadata.name` is absent
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(PdeError::missing(path));
    }
    let text = fs::read_to_string(path)?;
    Document::from_json_str(&source_name(path), &text)
}

/// Loads and renders one file. Validation problems are logged, not fatal.
pub fn render_file(path: &Path) -> Result<String> {
    let name = source_name(path);
    let document = load_document(path)?;
    if let Err(problem) = document.validate(&name) {
        warn!("{}", problem);
    }
    Ok(render_document(&document, Some(&name)))
}

/// Renders files in parallel; results come back in the order of `paths`.
pub fn render_files(paths: &[PathBuf]) -> Vec<(PathBuf, Result<String>)> {
    info!("rendering {} file(s)", paths.len());
    paths
        .par_iter()
        .map(|path| (path.clone(), render_file(path)))
        .collect()
}

/// Renders `paths` to `out`. A file that cannot be loaded is reported to `err` and
/// skipped, whatever the log level; returns the number of skipped files.
pub fn write_rendered(paths: &[PathBuf], out: &mut impl Write, err: &mut impl Write) -> Result<usize> {
    let mut skipped = 0;
    for (file, rendered) in render_files(paths) {
        match rendered {
            Ok(text) => write!(out, "{}", text)?,
            Err(e) => {
                skipped += 1;
                writeln!(err, "Skipping {}: {}", file.display(), e)?;
            }
        }
    }
    Ok(skipped)
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    if !path.is_file() {
        return Err(PdeError::missing(path));
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
