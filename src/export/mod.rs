//! # Export
//!
//! The "keep a copy" side of the fact finder: a pretty-printed JSON snapshot
//! and a self-contained printable HTML document, plus a print-preview path
//! that opens the HTML in the default browser so it can be saved as a PDF
//! from the print dialog.
//!
//! Export filenames are fixed so re-exports overwrite rather than pile up,
//! matching how the practice files them.

use std::io;
use std::path::Path;
use std::process::Command;

pub mod html;
pub mod json;

pub const JSON_EXPORT_FILENAME: &str = "IPW_ClareBen_FactFinder.json";
pub const HTML_EXPORT_FILENAME: &str = "IPW_ClareBen_FactFinder.html";
pub const PRINT_PREVIEW_FILENAME: &str = "IPW_ClareBen_FactFinder_print.html";

/// Opens a file with the platform's default handler. For an `.html` path
/// that is the default browser, which then runs the document's own
/// print-on-load script.
pub(crate) fn open_in_browser(path: &Path) -> io::Result<()> {
    let status = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()?
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).status()?
    } else {
        Command::new("xdg-open").arg(path).status()?
    };

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("browser launcher exited with {status}")))
    }
}
