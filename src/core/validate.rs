//! # Submission Gate
//!
//! A form may be submitted once the contact block is usable: a name, an
//! email with an `x@y.z` shape, explicit consent, and an untouched honeypot.
//! Everything else on the form is optional by design; clients often submit
//! with whole sections still blank.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::form::FactFinderForm;

/// Deliberately loose: any character run around `@` and a dot after it.
/// Deeper verification happens when the adviser replies to the address.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("email pattern is a valid regex"));

pub fn email_ok(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// True when the form clears every submission requirement.
pub fn is_valid(form: &FactFinderForm) -> bool {
    !form.contact.full_name.is_empty()
        && email_ok(&form.contact.email)
        && form.contact.consent
        && form.honeypot.is_empty()
}

/// Status-line hint shown when Ctrl+S is pressed on an incomplete form.
pub fn requirement_hint(form: &FactFinderForm) -> Option<&'static str> {
    if form.contact.full_name.is_empty() {
        Some("Your full name is required before submitting.")
    } else if !email_ok(&form.contact.email) {
        Some("A valid email address is required before submitting.")
    } else if !form.contact.consent {
        Some("Please tick the consent box before submitting.")
    } else if !form.honeypot.is_empty() {
        Some("This draft cannot be submitted.")
    } else {
        None
    }
}
