//! JSON export: the "Download a copy" action. The file holds the bare form
//! record (no submission metadata), pretty-printed with two-space indents,
//! and re-imports losslessly as a draft.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::core::form::FactFinderForm;

use super::JSON_EXPORT_FILENAME;

pub fn to_json(form: &FactFinderForm) -> serde_json::Result<String> {
    serde_json::to_string_pretty(form)
}

/// Writes `IPW_ClareBen_FactFinder.json` into `dir` and returns the path.
pub fn write_export(form: &FactFinderForm, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(JSON_EXPORT_FILENAME);
    let json = to_json(form).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    info!("JSON export written to {}", path.display());
    Ok(path)
}
