//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! reducer, the exports and the webhook client never touch the terminal.
//!
//! ## Redraw Strategy
//!
//! The event loop only draws when something changed: a key or paste event,
//! a resize, or the submission task reporting back. Idle, it sleeps in
//! `poll_event` for up to 100ms per tick. Nothing animates, so there is no
//! fixed frame rate.
//!
//! The hardware cursor stays hidden. The focused editor draws its own
//! cursor as a reversed cell, which keeps working when a long answer
//! soft-wraps inside the scroll view.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::draft;
use crate::core::form::FactFinderForm;
use crate::core::state::App;
use crate::export;
use crate::submit::{SubmissionClient, SubmissionEnvelope};
use crate::tui::components::{FormEvent, FormViewState};
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form_view: FormViewState,
}

impl TuiState {
    pub fn new(form: &FactFinderForm) -> Self {
        Self {
            form_view: FormViewState::new(form),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Bracketed paste keeps multi-line pastes out of the key event
        // stream, so a pasted address lands in one Paste event.
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);

    // Rehydrate answers, same as the page reading localStorage on mount.
    if let Some(saved) = draft::load() {
        app.form = saved;
        app.status_message = String::from("Draft restored.");
    }

    let mut tui = TuiState::new(&app.form);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for the submission result from the background task
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event();
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            if let Some(action) = route_event(&tui_event, &app, &mut tui) {
                let effect = update(&mut app, action);
                if handle_effect(effect, &mut app, &config, &tx) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle the submission task reporting back
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &mut app, &config, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    // One last save so quitting never loses answers.
    draft::save(&app.form);

    ratatui::restore();
    Ok(())
}

/// Translates one terminal event into at most one core action. The form
/// view gets first claim on editing and navigation keys; global shortcuts
/// bypass it.
fn route_event(tui_event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // Thank-you screen: Enter returns to the form, quitting still works.
    if app.submitted {
        return match tui_event {
            TuiEvent::Enter => Some(Action::BackToForm),
            TuiEvent::Quit => Some(Action::Quit),
            _ => None,
        };
    }

    match tui_event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Submit => Some(Action::Submit),
        TuiEvent::ExportJson => Some(Action::ExportJson),
        TuiEvent::ExportHtml => Some(Action::ExportHtml),
        TuiEvent::PrintPdf => Some(Action::PrintPdf),
        _ => tui
            .form_view
            .handle_event(tui_event, &app.form)
            .map(form_event_to_action),
    }
}

fn form_event_to_action(event: FormEvent) -> Action {
    match event {
        FormEvent::Edited(field, value) => Action::SetText(field, value),
        FormEvent::Toggled(flag) => Action::ToggleFlag(flag),
        FormEvent::Cycled(field, step) => Action::CycleSelect(field, step),
        FormEvent::ConcernToggled(index) => Action::ToggleConcern(index),
    }
}

/// Performs the I/O an `update` call asked for. Returns true when the
/// event loop should exit.
fn handle_effect(
    effect: Effect,
    app: &mut App,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}

        Effect::SaveDraft => draft::save(&app.form),

        Effect::SubmitForm => spawn_submission(app, tx.clone()),

        Effect::WriteJsonExport => {
            match export::json::write_export(&app.form, &config.export_dir) {
                Ok(path) => app.status_message = format!("Saved {}", path.display()),
                Err(e) => {
                    warn!("JSON export failed: {e}");
                    app.status_message = String::from("Export failed; see factfinder.log.");
                }
            }
        }

        Effect::WriteHtmlExport => {
            match export::html::write_export(&app.form, &config.export_dir) {
                Ok(path) => app.status_message = format!("Saved {}", path.display()),
                Err(e) => {
                    warn!("HTML export failed: {e}");
                    app.status_message = String::from("Export failed; see factfinder.log.");
                }
            }
        }

        Effect::OpenPrintPreview => match export::html::open_print_preview(&app.form) {
            Ok(path) => {
                app.status_message = format!("Print preview opened ({})", path.display());
            }
            Err(e) => {
                warn!("Print preview failed: {e}");
                app.status_message =
                    String::from("Could not open the print preview; see factfinder.log.");
            }
        },

        Effect::Quit => return true,
    }
    false
}

/// POSTs the envelope off the UI thread. The result comes back through
/// the action channel as `SubmissionFinished`.
fn spawn_submission(app: &App, tx: mpsc::Sender<Action>) {
    let Some(submitter) = app.submitter.clone() else {
        // update() only emits SubmitForm when a submitter is wired in.
        return;
    };
    let envelope = SubmissionEnvelope::new(&app.form);
    info!("Spawning submission task");
    tokio::spawn(async move {
        let result = submitter.submit(&envelope).await;
        if tx.send(Action::SubmissionFinished(result)).is_err() {
            warn!("Failed to send submission result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{FlagField, SelectField, TextField};
    use crate::test_support::test_app;

    #[test]
    fn test_global_shortcuts_route_to_actions() {
        let app = test_app();
        let mut tui = TuiState::new(&app.form);

        assert_eq!(
            route_event(&TuiEvent::Submit, &app, &mut tui),
            Some(Action::Submit)
        );
        assert_eq!(
            route_event(&TuiEvent::ExportJson, &app, &mut tui),
            Some(Action::ExportJson)
        );
        assert_eq!(
            route_event(&TuiEvent::ExportHtml, &app, &mut tui),
            Some(Action::ExportHtml)
        );
        assert_eq!(
            route_event(&TuiEvent::PrintPdf, &app, &mut tui),
            Some(Action::PrintPdf)
        );
        assert_eq!(
            route_event(&TuiEvent::Quit, &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_typing_routes_to_set_text_for_first_field() {
        let app = test_app();
        let mut tui = TuiState::new(&app.form);

        let action = route_event(&TuiEvent::InputChar('2'), &app, &mut tui);
        assert_eq!(
            action,
            Some(Action::SetText(TextField::Budget, "2".to_string()))
        );
    }

    #[test]
    fn test_focus_moves_produce_no_action() {
        let app = test_app();
        let mut tui = TuiState::new(&app.form);

        assert_eq!(route_event(&TuiEvent::FocusNext, &app, &mut tui), None);
        assert_eq!(route_event(&TuiEvent::FocusPrev, &app, &mut tui), None);
    }

    #[test]
    fn test_space_on_flag_field_toggles() {
        let app = test_app();
        let mut tui = TuiState::new(&app.form);

        // Walk to the first flag field (after the four text fields).
        for _ in 0..4 {
            route_event(&TuiEvent::FocusNext, &app, &mut tui);
        }
        let action = route_event(&TuiEvent::InputChar(' '), &app, &mut tui);
        assert_eq!(action, Some(Action::ToggleFlag(FlagField::AmysApartment)));
    }

    #[test]
    fn test_form_event_mapping_is_one_to_one() {
        assert_eq!(
            form_event_to_action(FormEvent::Edited(TextField::Email, "a@b.c".to_string())),
            Action::SetText(TextField::Email, "a@b.c".to_string())
        );
        assert_eq!(
            form_event_to_action(FormEvent::Toggled(FlagField::Consent)),
            Action::ToggleFlag(FlagField::Consent)
        );
        assert_eq!(
            form_event_to_action(FormEvent::Cycled(SelectField::Residency, -1)),
            Action::CycleSelect(SelectField::Residency, -1)
        );
        assert_eq!(
            form_event_to_action(FormEvent::ConcernToggled(3)),
            Action::ToggleConcern(3)
        );
    }

    #[test]
    fn test_submitted_screen_only_answers_enter_and_quit() {
        let mut app = test_app();
        app.submitted = true;
        let mut tui = TuiState::new(&app.form);

        assert_eq!(
            route_event(&TuiEvent::Enter, &app, &mut tui),
            Some(Action::BackToForm)
        );
        assert_eq!(
            route_event(&TuiEvent::Quit, &app, &mut tui),
            Some(Action::Quit)
        );
        assert_eq!(route_event(&TuiEvent::InputChar('x'), &app, &mut tui), None);
        assert_eq!(route_event(&TuiEvent::Submit, &app, &mut tui), None);
    }
}
