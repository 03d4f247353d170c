//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::form::{CONCERN_OPTIONS, FactFinderForm};
use crate::core::state::App;
use crate::submit::{SubmissionClient, SubmissionEnvelope, SubmitError};

/// A submitter for tests that don't need real webhook calls.
pub struct NoopSubmitter;

#[async_trait]
impl SubmissionClient for NoopSubmitter {
    async fn submit(&self, _envelope: &SubmissionEnvelope) -> Result<(), SubmitError> {
        Ok(())
    }
}

/// Creates a test App wired to a NoopSubmitter.
pub fn test_app() -> App {
    App::new(Some(Arc::new(NoopSubmitter)))
}

/// Creates a test App with no webhook configured.
pub fn offline_app() -> App {
    App::new(None)
}

/// The smallest form that clears the submission gate.
pub fn complete_form() -> FactFinderForm {
    let mut form = FactFinderForm::default();
    form.contact.full_name = "Clare Smith".to_string();
    form.contact.email = "clare@example.com".to_string();
    form.contact.consent = true;
    form
}

/// A form with every section exercised, for export and payload tests.
pub fn filled_form() -> FactFinderForm {
    let mut form = complete_form();

    form.property.budget = "$1.6m – $2.2m".to_string();
    form.property.timeframe = "Within 6–12 months".to_string();
    form.property.suburbs = "Mosman\nNeutral Bay\nCremorne".to_string();
    form.property.property_types = "Freestanding house, 3+ beds, 2 baths".to_string();

    form.funding.savings_aud = "$350k".to_string();
    form.funding.savings_overseas = "£120k (GBP)".to_string();
    form.funding.inheritances = "Possible gift from Ben's parents, around $200k in 2027".to_string();
    form.funding.mortgages = "None".to_string();
    form.funding.shares = "Uber RSUs, roughly $180k vested".to_string();
    form.funding.other_liquid = "$25k".to_string();

    form.income_tax.salaries_benefits = "Clare $210k + super, Ben $180k".to_string();
    form.income_tax.equity = "Uber RSUs vesting quarterly".to_string();
    form.income_tax.residency = "Non-resident".to_string();
    form.income_tax.tax_advice = "None yet".to_string();

    form.family.children_plan = "Yes".to_string();
    form.family.living_arrangements = "Overseas for two more years, then Sydney".to_string();
    form.family.schooling_childcare = "Prefer lower north shore catchments".to_string();

    form.family_support.receiving_support = "Yes".to_string();
    form.family_support.support_types = "Gifted equity via Amy's apartment".to_string();
    form.family_support.terms_or_expectations = "No repayment expected, nothing in writing".to_string();
    form.family_support.independence_concerns = "Some concern about decision rights".to_string();

    form.other.return_timeline = "Mid-2027".to_string();
    form.toggle_concern(CONCERN_OPTIONS[3]);
    form.toggle_concern(CONCERN_OPTIONS[0]);
    form.other.notes = "Flexible on timing if the right home appears".to_string();
    form.other.investment_vs_ppr =
        "Compare investment property and principal residence".to_string();

    form.contact.phone = "+61 400 123 456".to_string();

    form
}
