//! # Fact Finder Record
//!
//! The typed record behind the Clare & Ben checklist. Seven sections plus a
//! hidden honeypot field, serialized with the exact JSON keys the draft file,
//! the JSON export and the webhook payload all share:
//!
//! ```text
//! FactFinderForm
//! ├── property       // budget, timeframe, suburbs, types, two toggles
//! ├── funding        // savings, inheritances, mortgages, shares
//! ├── incomeTax      // employment income, equity, residency select
//! ├── family         // children plan, living arrangements, schooling
//! ├── familySupport  // favours from family and strings attached
//! ├── other          // return timeline, concerns checklist, model type
//! ├── contact        // name, email, phone, consent
//! └── _hp            // honeypot, must stay empty
//! ```
//!
//! The `TextField`/`SelectField`/`FlagField` enums give the reducer and the
//! form view a typed address for every editable slot, so nothing outside this
//! module touches fields by string name.

use serde::{Deserialize, Serialize};

/// The fixed concerns checklist, in form and print order.
pub const CONCERN_OPTIONS: [&str; 5] = [
    "Foreign purchaser duty",
    "Stamp duty (NSW concessions/thresholds)",
    "Tax implications (non-resident)",
    "Financing while overseas",
    "Accepting a favour from family (and how to structure it)",
];

pub const RESIDENCY_OPTIONS: [&str; 3] =
    ["Non-resident", "Establish Australian residency", "Undecided"];

pub const YES_NO_UNDECIDED: [&str; 3] = ["Yes", "No", "Undecided"];

pub const PURCHASE_MODEL_OPTIONS: [&str; 2] = [
    "Principal residence only",
    "Compare investment property and principal residence",
];

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertySection {
    pub budget: String,
    pub timeframe: String,
    pub suburbs: String,
    pub property_types: String,
    pub amys_apartment_option: bool,
    pub focus_family_home: bool,
}

impl Default for PropertySection {
    fn default() -> Self {
        Self {
            budget: String::new(),
            timeframe: String::new(),
            suburbs: String::new(),
            property_types: String::new(),
            amys_apartment_option: false,
            // The brief starts from a family home unless the clients say otherwise.
            focus_family_home: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingSection {
    pub savings_aud: String,
    pub savings_overseas: String,
    pub inheritances: String,
    pub mortgages: String,
    pub shares: String,
    pub other_liquid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeTaxSection {
    pub salaries_benefits: String,
    pub equity: String,
    pub residency: String,
    pub tax_advice: String,
}

impl Default for IncomeTaxSection {
    fn default() -> Self {
        Self {
            salaries_benefits: String::new(),
            equity: String::new(),
            residency: "Undecided".to_string(),
            tax_advice: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilySection {
    pub children_plan: String,
    pub living_arrangements: String,
    pub schooling_childcare: String,
}

impl Default for FamilySection {
    fn default() -> Self {
        Self {
            children_plan: "Undecided".to_string(),
            living_arrangements: String::new(),
            schooling_childcare: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilySupportSection {
    pub receiving_support: String,
    pub support_types: String,
    pub terms_or_expectations: String,
    pub independence_concerns: String,
}

impl Default for FamilySupportSection {
    fn default() -> Self {
        Self {
            receiving_support: "Undecided".to_string(),
            support_types: String::new(),
            terms_or_expectations: String::new(),
            independence_concerns: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherSection {
    pub return_timeline: String,
    /// Checked entries from [`CONCERN_OPTIONS`], in the order they were ticked.
    pub concerns: Vec<String>,
    pub notes: String,
    #[serde(rename = "investmentVsPPR")]
    pub investment_vs_ppr: String,
}

impl Default for OtherSection {
    fn default() -> Self {
        Self {
            return_timeline: String::new(),
            concerns: Vec::new(),
            notes: String::new(),
            investment_vs_ppr: "Principal residence only".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub consent: bool,
}

// ============================================================================
// The form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactFinderForm {
    pub property: PropertySection,
    pub funding: FundingSection,
    pub income_tax: IncomeTaxSection,
    pub family: FamilySection,
    pub family_support: FamilySupportSection,
    pub other: OtherSection,
    pub contact: ContactSection,
    /// Spam honeypot. Never rendered; any content fails validation.
    #[serde(rename = "_hp")]
    pub honeypot: String,
}

impl FactFinderForm {
    /// Tick or untick one concern. Unticking keeps the relative order of the
    /// remaining entries; re-ticking appends at the end.
    pub fn toggle_concern(&mut self, concern: &str) {
        let concerns = &mut self.other.concerns;
        if let Some(idx) = concerns.iter().position(|c| c == concern) {
            concerns.remove(idx);
        } else {
            concerns.push(concern.to_string());
        }
    }
}

// ============================================================================
// Typed field addresses
// ============================================================================

/// Every free-text slot on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Budget,
    Timeframe,
    Suburbs,
    PropertyTypes,
    SavingsAud,
    SavingsOverseas,
    Inheritances,
    Mortgages,
    Shares,
    OtherLiquid,
    SalariesBenefits,
    Equity,
    TaxAdvice,
    LivingArrangements,
    SchoolingChildcare,
    SupportTypes,
    TermsOrExpectations,
    IndependenceConcerns,
    ReturnTimeline,
    Notes,
    FullName,
    Email,
    Phone,
}

impl TextField {
    pub fn get(self, form: &FactFinderForm) -> &str {
        match self {
            TextField::Budget => &form.property.budget,
            TextField::Timeframe => &form.property.timeframe,
            TextField::Suburbs => &form.property.suburbs,
            TextField::PropertyTypes => &form.property.property_types,
            TextField::SavingsAud => &form.funding.savings_aud,
            TextField::SavingsOverseas => &form.funding.savings_overseas,
            TextField::Inheritances => &form.funding.inheritances,
            TextField::Mortgages => &form.funding.mortgages,
            TextField::Shares => &form.funding.shares,
            TextField::OtherLiquid => &form.funding.other_liquid,
            TextField::SalariesBenefits => &form.income_tax.salaries_benefits,
            TextField::Equity => &form.income_tax.equity,
            TextField::TaxAdvice => &form.income_tax.tax_advice,
            TextField::LivingArrangements => &form.family.living_arrangements,
            TextField::SchoolingChildcare => &form.family.schooling_childcare,
            TextField::SupportTypes => &form.family_support.support_types,
            TextField::TermsOrExpectations => &form.family_support.terms_or_expectations,
            TextField::IndependenceConcerns => &form.family_support.independence_concerns,
            TextField::ReturnTimeline => &form.other.return_timeline,
            TextField::Notes => &form.other.notes,
            TextField::FullName => &form.contact.full_name,
            TextField::Email => &form.contact.email,
            TextField::Phone => &form.contact.phone,
        }
    }

    fn slot(self, form: &mut FactFinderForm) -> &mut String {
        match self {
            TextField::Budget => &mut form.property.budget,
            TextField::Timeframe => &mut form.property.timeframe,
            TextField::Suburbs => &mut form.property.suburbs,
            TextField::PropertyTypes => &mut form.property.property_types,
            TextField::SavingsAud => &mut form.funding.savings_aud,
            TextField::SavingsOverseas => &mut form.funding.savings_overseas,
            TextField::Inheritances => &mut form.funding.inheritances,
            TextField::Mortgages => &mut form.funding.mortgages,
            TextField::Shares => &mut form.funding.shares,
            TextField::OtherLiquid => &mut form.funding.other_liquid,
            TextField::SalariesBenefits => &mut form.income_tax.salaries_benefits,
            TextField::Equity => &mut form.income_tax.equity,
            TextField::TaxAdvice => &mut form.income_tax.tax_advice,
            TextField::LivingArrangements => &mut form.family.living_arrangements,
            TextField::SchoolingChildcare => &mut form.family.schooling_childcare,
            TextField::SupportTypes => &mut form.family_support.support_types,
            TextField::TermsOrExpectations => &mut form.family_support.terms_or_expectations,
            TextField::IndependenceConcerns => &mut form.family_support.independence_concerns,
            TextField::ReturnTimeline => &mut form.other.return_timeline,
            TextField::Notes => &mut form.other.notes,
            TextField::FullName => &mut form.contact.full_name,
            TextField::Email => &mut form.contact.email,
            TextField::Phone => &mut form.contact.phone,
        }
    }

    pub fn set(self, form: &mut FactFinderForm, value: String) {
        *self.slot(form) = value;
    }
}

/// The four fixed-choice slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectField {
    Residency,
    ChildrenPlan,
    ReceivingSupport,
    PurchaseModel,
}

impl SelectField {
    pub fn options(self) -> &'static [&'static str] {
        match self {
            SelectField::Residency => &RESIDENCY_OPTIONS,
            SelectField::ChildrenPlan => &YES_NO_UNDECIDED,
            SelectField::ReceivingSupport => &YES_NO_UNDECIDED,
            SelectField::PurchaseModel => &PURCHASE_MODEL_OPTIONS,
        }
    }

    pub fn get(self, form: &FactFinderForm) -> &str {
        match self {
            SelectField::Residency => &form.income_tax.residency,
            SelectField::ChildrenPlan => &form.family.children_plan,
            SelectField::ReceivingSupport => &form.family_support.receiving_support,
            SelectField::PurchaseModel => &form.other.investment_vs_ppr,
        }
    }

    fn slot(self, form: &mut FactFinderForm) -> &mut String {
        match self {
            SelectField::Residency => &mut form.income_tax.residency,
            SelectField::ChildrenPlan => &mut form.family.children_plan,
            SelectField::ReceivingSupport => &mut form.family_support.receiving_support,
            SelectField::PurchaseModel => &mut form.other.investment_vs_ppr,
        }
    }

    /// Step through the options, wrapping at either end. A value that is not
    /// in the option list (hand-edited draft) resets to the first option.
    pub fn cycle(self, form: &mut FactFinderForm, step: i8) {
        let options = self.options();
        let next = match options.iter().position(|o| *o == self.get(form)) {
            Some(current) => (current as i8 + step).rem_euclid(options.len() as i8) as usize,
            None => 0,
        };
        *self.slot(form) = options[next].to_string();
    }
}

/// The three boolean slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    AmysApartment,
    FocusFamilyHome,
    Consent,
}

impl FlagField {
    pub fn get(self, form: &FactFinderForm) -> bool {
        match self {
            FlagField::AmysApartment => form.property.amys_apartment_option,
            FlagField::FocusFamilyHome => form.property.focus_family_home,
            FlagField::Consent => form.contact.consent,
        }
    }

    pub fn toggle(self, form: &mut FactFinderForm) {
        let slot = match self {
            FlagField::AmysApartment => &mut form.property.amys_apartment_option,
            FlagField::FocusFamilyHome => &mut form.property.focus_family_home,
            FlagField::Consent => &mut form.contact.consent,
        };
        *slot = !*slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_blank_intake() {
        let form = FactFinderForm::default();
        assert!(form.property.budget.is_empty());
        assert!(!form.property.amys_apartment_option);
        assert!(form.property.focus_family_home);
        assert_eq!(form.income_tax.residency, "Undecided");
        assert_eq!(form.family.children_plan, "Undecided");
        assert_eq!(form.family_support.receiving_support, "Undecided");
        assert_eq!(form.other.investment_vs_ppr, "Principal residence only");
        assert!(form.other.concerns.is_empty());
        assert!(!form.contact.consent);
        assert!(form.honeypot.is_empty());
    }

    #[test]
    fn test_serialized_keys_are_stable() {
        let json = serde_json::to_string(&FactFinderForm::default()).unwrap();
        for key in [
            "\"property\"",
            "\"amysApartmentOption\"",
            "\"focusFamilyHome\"",
            "\"propertyTypes\"",
            "\"savingsAud\"",
            "\"savingsOverseas\"",
            "\"otherLiquid\"",
            "\"incomeTax\"",
            "\"salariesBenefits\"",
            "\"taxAdvice\"",
            "\"childrenPlan\"",
            "\"livingArrangements\"",
            "\"schoolingChildcare\"",
            "\"familySupport\"",
            "\"receivingSupport\"",
            "\"termsOrExpectations\"",
            "\"independenceConcerns\"",
            "\"returnTimeline\"",
            "\"investmentVsPPR\"",
            "\"fullName\"",
            "\"_hp\"",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn test_json_round_trip_preserves_form() {
        let mut form = FactFinderForm::default();
        form.property.budget = "$1.6m – $2.2m".to_string();
        form.property.suburbs = "Mosman\nCremorne".to_string();
        form.other.concerns = vec![CONCERN_OPTIONS[0].to_string(), CONCERN_OPTIONS[3].to_string()];
        form.contact.full_name = "Clare Smith".to_string();
        form.contact.consent = true;

        let json = serde_json::to_string(&form).unwrap();
        let back: FactFinderForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // A draft written by an older shape should still hydrate.
        let form: FactFinderForm =
            serde_json::from_str(r#"{"contact":{"fullName":"Ben"}}"#).unwrap();
        assert_eq!(form.contact.full_name, "Ben");
        assert!(form.property.focus_family_home);
        assert_eq!(form.family.children_plan, "Undecided");
    }

    #[test]
    fn test_toggle_concern_round_trips() {
        let mut form = FactFinderForm::default();
        form.toggle_concern(CONCERN_OPTIONS[1]);
        assert_eq!(form.other.concerns, vec![CONCERN_OPTIONS[1]]);
        form.toggle_concern(CONCERN_OPTIONS[1]);
        assert!(form.other.concerns.is_empty());
    }

    #[test]
    fn test_toggle_concern_keeps_order_of_others() {
        let mut form = FactFinderForm::default();
        form.toggle_concern(CONCERN_OPTIONS[0]);
        form.toggle_concern(CONCERN_OPTIONS[2]);
        form.toggle_concern(CONCERN_OPTIONS[4]);
        form.toggle_concern(CONCERN_OPTIONS[2]);
        assert_eq!(
            form.other.concerns,
            vec![CONCERN_OPTIONS[0], CONCERN_OPTIONS[4]]
        );
    }

    #[test]
    fn test_text_field_accessors_agree() {
        let mut form = FactFinderForm::default();
        TextField::Mortgages.set(&mut form, "Offset on the London flat".to_string());
        assert_eq!(TextField::Mortgages.get(&form), "Offset on the London flat");
        assert_eq!(form.funding.mortgages, "Offset on the London flat");
    }

    #[test]
    fn test_select_cycle_wraps_both_ways() {
        let mut form = FactFinderForm::default();
        // "Undecided" is last in the residency list.
        SelectField::Residency.cycle(&mut form, 1);
        assert_eq!(form.income_tax.residency, "Non-resident");
        SelectField::Residency.cycle(&mut form, -1);
        assert_eq!(form.income_tax.residency, "Undecided");
    }

    #[test]
    fn test_select_cycle_resets_unknown_value() {
        let mut form = FactFinderForm::default();
        form.income_tax.residency = "Dual citizen".to_string();
        SelectField::Residency.cycle(&mut form, 1);
        assert_eq!(form.income_tax.residency, "Non-resident");
    }

    #[test]
    fn test_flag_toggle_flips() {
        let mut form = FactFinderForm::default();
        FlagField::Consent.toggle(&mut form);
        assert!(form.contact.consent);
        FlagField::FocusFamilyHome.toggle(&mut form);
        assert!(!form.property.focus_family_home);
    }
}
