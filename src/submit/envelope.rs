//! The webhook payload: the form wrapped with submission metadata, so the
//! receiving automation can file it without opening the form body.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::core::form::FactFinderForm;

pub const CLIENT_NAMES: &str = "Clare & Ben";
pub const SOURCE_TAG: &str = "IPW Online Fact Finder";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMeta {
    /// RFC 3339 UTC with millisecond precision, e.g. `2026-08-23T04:05:06.789Z`.
    pub created_at: String,
    pub client_names: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionEnvelope {
    pub meta: SubmissionMeta,
    pub data: FactFinderForm,
}

impl SubmissionEnvelope {
    pub fn new(form: &FactFinderForm) -> Self {
        Self {
            meta: SubmissionMeta {
                created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                client_names: CLIENT_NAMES.to_string(),
                source: SOURCE_TAG.to_string(),
            },
            data: form.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_envelope_meta_is_fixed() {
        let envelope = SubmissionEnvelope::new(&FactFinderForm::default());
        assert_eq!(envelope.meta.client_names, "Clare & Ben");
        assert_eq!(envelope.meta.source, "IPW Online Fact Finder");
    }

    #[test]
    fn test_created_at_is_rfc3339_utc_millis() {
        let envelope = SubmissionEnvelope::new(&FactFinderForm::default());
        let stamp = &envelope.meta.created_at;
        assert!(stamp.ends_with('Z'), "not UTC: {stamp}");
        // 2026-08-23T04:05:06.789Z → exactly three fractional digits
        let fraction = stamp.split('.').nth(1).unwrap();
        assert_eq!(fraction.len(), 4, "expected mmmZ, got {fraction}");
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_envelope_serializes_with_camel_case_meta() {
        let mut form = FactFinderForm::default();
        form.contact.full_name = "Clare Smith".to_string();
        let envelope = SubmissionEnvelope::new(&form);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["meta"]["clientNames"], "Clare & Ben");
        assert_eq!(value["meta"]["source"], "IPW Online Fact Finder");
        assert!(value["meta"]["createdAt"].is_string());
        assert_eq!(value["data"]["contact"]["fullName"], "Clare Smith");
    }

    #[test]
    fn test_envelope_clones_the_form_as_is() {
        let mut form = FactFinderForm::default();
        form.toggle_concern("Financing while overseas");
        let envelope = SubmissionEnvelope::new(&form);
        assert_eq!(envelope.data, form);
    }
}
