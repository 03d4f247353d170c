//! # Draft Persistence
//!
//! The form autosaves after every change so nothing is lost to a crash or an
//! accidental quit. One draft, one file: `~/.factfinder/draft.json`, holding
//! the same JSON shape as the export and the webhook payload.
//!
//! Writes are atomic: serialize to `draft.json.tmp`, then rename over the
//! real file. A crash mid-write leaves the previous draft intact.
//!
//! Persistence is best-effort. A failed save or an unreadable draft is
//! logged and otherwise ignored; the form must keep working without it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::form::FactFinderForm;

/// Returns `~/.factfinder/draft.json`, creating the directory if needed.
pub fn draft_path() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))?;
    let dir = home.join(".factfinder");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("draft.json"))
}

fn save_to(path: &Path, form: &FactFinderForm) -> io::Result<()> {
    let json = serde_json::to_string_pretty(form)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn load_from(path: &Path) -> io::Result<FactFinderForm> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Best-effort autosave.
pub fn save(form: &FactFinderForm) {
    match draft_path() {
        Ok(path) => match save_to(&path, form) {
            Ok(()) => debug!("Draft saved to {}", path.display()),
            Err(e) => warn!("Failed to save draft: {e}"),
        },
        Err(e) => warn!("No draft location available: {e}"),
    }
}

/// Loads the saved draft, if a readable one exists. A corrupt or missing
/// file yields `None` and the form starts blank.
pub fn load() -> Option<FactFinderForm> {
    let path = draft_path().ok()?;
    if !path.exists() {
        return None;
    }
    match load_from(&path) {
        Ok(form) => {
            debug!("Draft restored from {}", path.display());
            Some(form)
        }
        Err(e) => {
            warn!("Ignoring unreadable draft: {e}");
            None
        }
    }
}

/// Removes the saved draft (the `--reset` flag).
pub fn delete() {
    let Ok(path) = draft_path() else { return };
    if !path.exists() {
        return;
    }
    match fs::remove_file(&path) {
        Ok(()) => debug!("Draft deleted from {}", path.display()),
        Err(e) => warn!("Failed to delete draft: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "factfinder-draft-test-{}-{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round-trip");
        let mut form = FactFinderForm::default();
        form.contact.full_name = "Clare Smith".to_string();
        form.property.suburbs = "Mosman\nNeutral Bay".to_string();
        form.toggle_concern("Financing while overseas");

        save_to(&path, &form).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, form);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_leaves_no_tmp_file_behind() {
        let path = temp_path("tmp-cleanup");
        save_to(&path, &FactFinderForm::default()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_draft() {
        let path = temp_path("overwrite");
        let mut form = FactFinderForm::default();
        form.contact.full_name = "First".to_string();
        save_to(&path, &form).unwrap();
        form.contact.full_name = "Second".to_string();
        save_to(&path, &form).unwrap();

        assert_eq!(load_from(&path).unwrap().contact.full_name, "Second");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = temp_path("missing");
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn test_load_corrupt_draft_is_invalid_data() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();
        let err = load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_draft_json_uses_export_keys() {
        let path = temp_path("keys");
        save_to(&path, &FactFinderForm::default()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"focusFamilyHome\": true"));
        assert!(raw.contains("\"_hp\""));
        fs::remove_file(&path).unwrap();
    }
}
