//! # Actions
//!
//! Everything that can happen in the fact finder becomes an `Action`.
//! User types a character into the budget field? That's
//! `Action::SetText(TextField::Budget, ..)`. The webhook answers? That's
//! `Action::SubmissionFinished(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the caller must perform. No side
//! effects here. I/O happens in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive `update` with a script of actions
//! and assert on the state and effects, no terminal or network required.

use log::{info, warn};

use crate::core::form::{CONCERN_OPTIONS, FlagField, SelectField, TextField};
use crate::core::state::App;
use crate::core::validate;
use crate::submit::SubmitError;

/// The one error message the form ever shows for a failed submission.
/// Transport detail goes to the log, not to the clients.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Submission failed. Please try again or email us directly.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the full text of one field with the editor's buffer.
    SetText(TextField, String),
    ToggleFlag(FlagField),
    /// Step a fixed-choice field forward (+1) or back (-1).
    CycleSelect(SelectField, i8),
    /// Tick or untick `CONCERN_OPTIONS[index]`.
    ToggleConcern(usize),
    Submit,
    SubmissionFinished(Result<(), SubmitError>),
    BackToForm,
    ExportJson,
    ExportHtml,
    PrintPdf,
    Quit,
}

/// Work the TUI loop performs after an `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SaveDraft,
    SubmitForm,
    WriteJsonExport,
    WriteHtmlExport,
    OpenPrintPreview,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetText(field, value) => {
            field.set(&mut app.form, value);
            Effect::SaveDraft
        }

        Action::ToggleFlag(field) => {
            field.toggle(&mut app.form);
            Effect::SaveDraft
        }

        Action::CycleSelect(field, step) => {
            field.cycle(&mut app.form, step);
            Effect::SaveDraft
        }

        Action::ToggleConcern(index) => match CONCERN_OPTIONS.get(index) {
            Some(concern) => {
                app.form.toggle_concern(concern);
                Effect::SaveDraft
            }
            None => Effect::None,
        },

        Action::Submit => {
            if app.submitting {
                return Effect::None;
            }
            if let Some(hint) = validate::requirement_hint(&app.form) {
                app.status_message = hint.to_string();
                return Effect::None;
            }
            app.error = None;
            if app.submitter.is_some() {
                app.submitting = true;
                app.status_message = String::from("Submitting…");
                Effect::SubmitForm
            } else {
                // No webhook configured: accept locally, same as the page.
                info!("No webhook configured; submission recorded locally");
                app.submitted = true;
                Effect::None
            }
        }

        Action::SubmissionFinished(result) => {
            app.submitting = false;
            match result {
                Ok(()) => {
                    app.submitted = true;
                    app.status_message = String::new();
                }
                Err(e) => {
                    warn!("Submission failed: {e}");
                    app.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                    app.status_message = String::new();
                }
            }
            Effect::None
        }

        Action::BackToForm => {
            app.submitted = false;
            Effect::None
        }

        Action::ExportJson => Effect::WriteJsonExport,
        Action::ExportHtml => Effect::WriteHtmlExport,
        Action::PrintPdf => Effect::OpenPrintPreview,
        Action::Quit => Effect::Quit,
    }
}
