//! # Application State
//!
//! Core business state for the fact finder. This module contains domain
//! state only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── form: FactFinderForm             // the intake record
//! ├── submitter: Option<Arc<dyn ..>>   // webhook client, None = offline
//! ├── submitting: bool                 // POST in flight
//! ├── submitted: bool                  // thank-you screen showing
//! ├── error: Option<String>            // submission failure banner
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::form::FactFinderForm;
use crate::submit::{SubmissionClient, WebhookClient};

pub struct App {
    pub form: FactFinderForm,
    pub submitter: Option<Arc<dyn SubmissionClient>>,
    pub submitting: bool,
    /// True once a submission has been accepted; the form stays editable
    /// after returning from the thank-you screen.
    pub submitted: bool,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(submitter: Option<Arc<dyn SubmissionClient>>) -> Self {
        Self {
            form: FactFinderForm::default(),
            submitter,
            submitting: false,
            submitted: false,
            error: None,
            status_message: String::from("Answers are saved to your draft as you type."),
        }
    }

    /// Wires the webhook client in when one is configured; without a webhook
    /// the app runs fully offline and Submit completes locally.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let submitter = config
            .webhook_url
            .clone()
            .map(|url| Arc::new(WebhookClient::new(url)) as Arc<dyn SubmissionClient>);
        Self::new(submitter)
    }
}
