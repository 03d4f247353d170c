//! Printable document builder.
//!
//! Renders the whole fact finder as one self-contained HTML file: the same
//! six numbered sections as the form plus Contact & Consent, wrapped in the
//! IPW-branded stylesheet. Free-text answers are HTML-escaped and keep their
//! line breaks (`white-space: pre-wrap`); multi-line "list" answers render
//! as bullet lists.
//!
//! The document carries its own print trigger. [`PrintMode::Download`] keeps
//! it behind the `IPW_PRINT` window-name gate, so a downloaded copy opens
//! quietly; [`PrintMode::AutoPrint`] fires unconditionally and is used for
//! the save-as-PDF preview file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use crate::core::form::FactFinderForm;

use super::{HTML_EXPORT_FILENAME, PRINT_PREVIEW_FILENAME};

/// Date format for the document header, en-AU long form: `23 August 2026`.
const PREPARED_ON_FORMAT: &str = "%-d %B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// The keep-a-copy artifact; prints only inside the named print window.
    Download,
    /// The save-as-PDF preview; prints as soon as the browser loads it.
    AutoPrint,
}

/// Escapes a value for use in HTML text content or attributes.
/// Ampersand first, or the later entities would be double-escaped.
pub fn esc(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One `<li>` per non-blank line; surrounding whitespace trimmed.
pub fn format_list(value: &str) -> String {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<li>{}</li>", esc(line)))
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn prepared_on() -> String {
    Local::now().format(PREPARED_ON_FORMAT).to_string()
}

pub fn build_document(form: &FactFinderForm, mode: PrintMode) -> String {
    render_document(form, mode, &prepared_on())
}

// ============================================================================
// Template
// ============================================================================

const DOC_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>IPW – Clare & Ben Fact Finder</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
  :root{
    --navy:#003366; --grey:#666666;
    --beige1:#B4A597; --beige4:#BDAEA5; --white:#fff;
  }
  *{box-sizing:border-box;font-family:system-ui,Segoe UI,Roboto,Helvetica,Arial,sans-serif}
  body{margin:0;background:linear-gradient(135deg,var(--beige4),var(--beige1))}
  .wrap{max-width:840px;margin:24px auto;padding:24px}
  .card{background:#fff;border:1px solid #e5e7eb;border-radius:16px;box-shadow:0 6px 20px rgba(0,0,0,.06);padding:28px}
  header.h{display:flex;gap:16px;align-items:center;background:var(--navy);color:#fff;border-radius:16px;padding:18px 20px;margin-bottom:16px}
  .mark{font-size:24px;font-weight:700;letter-spacing:2px;border:2px solid #fff;border-radius:8px;padding:6px 10px}
  h1{margin:0;font-size:20px}
  .muted{color:#e6e6e6;font-size:12px}
  h2.sec{color:var(--navy);border-bottom:2px solid #eef2f7;padding-bottom:6px;margin-top:24px}
  dl{display:grid;grid-template-columns:220px 1fr;gap:8px 18px;margin:0}
  dt{color:var(--navy);font-weight:600}
  dd{margin:0;color:#1f2937;white-space:pre-wrap}
  ul{margin:4px 0 0 18px}
  .footer{margin-top:18px;color:var(--grey);font-size:12px}
  @media print{
    body{background:#fff}
    .wrap{margin:0;max-width:none}
    header.h{border-radius:0}
    a.print-hide, .print-hide{display:none !important}
  }
</style>
</head>
<body>
  <div class="wrap">
"#;

const FOOTER_TEXT: &str = "Prepared for modelling purposes by Integral Private Wealth. \
This document summarises client‑provided inputs and does not constitute personal advice.";

const TIP_LINE: &str = r#"    <p class="muted print-hide" style="text-align:center;margin-top:12px">Tip: In the print dialog, choose “Save as PDF”.</p>
"#;

const GATED_PRINT_SCRIPT: &str = r#"  <script>
    window.addEventListener('load', function(){
      // auto-print only when opened as the named print window
      if (window.name === 'IPW_PRINT') {
        setTimeout(function(){ window.print(); }, 300);
      }
    });
  </script>
"#;

const AUTO_PRINT_SCRIPT: &str = r#"  <script>
    window.addEventListener('load', function(){
      setTimeout(function(){ window.print(); }, 300);
    });
  </script>
"#;

fn section(doc: &mut String, title: &str) {
    doc.push_str(&format!("      <h2 class=\"sec\">{title}</h2>\n      <dl>\n"));
}

fn end_section(doc: &mut String) {
    doc.push_str("      </dl>\n");
}

fn text_row(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!("        <dt>{label}</dt><dd>{}</dd>\n", esc(value)));
}

fn list_row(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!(
        "        <dt>{label}</dt><dd><ul>{}</ul></dd>\n",
        format_list(value)
    ));
}

fn flag_row(doc: &mut String, label: &str, value: bool) {
    doc.push_str(&format!("        <dt>{label}</dt><dd>{}</dd>\n", yes_no(value)));
}

fn render_document(form: &FactFinderForm, mode: PrintMode, prepared_on: &str) -> String {
    let concern_items: String = form
        .other
        .concerns
        .iter()
        .map(|c| format!("<li>{}</li>", esc(c)))
        .collect();

    let mut doc = String::with_capacity(8 * 1024);
    doc.push_str(DOC_HEAD);

    doc.push_str(&format!(
        r#"    <header class="h">
      <span class="mark">IPW</span>
      <div>
        <h1>Clare &amp; Ben – Checklist &amp; Fact Finder</h1>
        <div class="muted">Integral Private Wealth • {prepared_on}</div>
      </div>
    </header>

    <div class="card">
"#
    ));

    section(&mut doc, "1. Property Objectives");
    text_row(&mut doc, "Budget", &form.property.budget);
    text_row(&mut doc, "Timeframe", &form.property.timeframe);
    list_row(&mut doc, "Preferred suburbs", &form.property.suburbs);
    list_row(&mut doc, "Property types", &form.property.property_types);
    flag_row(&mut doc, "Amy’s apartment?", form.property.amys_apartment_option);
    flag_row(&mut doc, "Focus on family home?", form.property.focus_family_home);
    end_section(&mut doc);

    section(&mut doc, "2. Funding Position");
    text_row(&mut doc, "Savings (AUD)", &form.funding.savings_aud);
    text_row(&mut doc, "Savings (Overseas)", &form.funding.savings_overseas);
    text_row(&mut doc, "Inheritances / gifts", &form.funding.inheritances);
    text_row(&mut doc, "Mortgages", &form.funding.mortgages);
    text_row(&mut doc, "Shareholdings", &form.funding.shares);
    text_row(&mut doc, "Other liquid", &form.funding.other_liquid);
    end_section(&mut doc);

    section(&mut doc, "3. Income &amp; Tax Residency");
    text_row(&mut doc, "Employment / benefits", &form.income_tax.salaries_benefits);
    text_row(&mut doc, "Equity / bonuses", &form.income_tax.equity);
    text_row(&mut doc, "Residency for purchase", &form.income_tax.residency);
    text_row(&mut doc, "Tax advice received", &form.income_tax.tax_advice);
    end_section(&mut doc);

    section(&mut doc, "4. Family Planning");
    text_row(&mut doc, "Children plan (2–4 yrs)", &form.family.children_plan);
    text_row(&mut doc, "Living arrangements", &form.family.living_arrangements);
    text_row(&mut doc, "Schooling / childcare", &form.family.schooling_childcare);
    end_section(&mut doc);

    section(&mut doc, "5. Family Support &amp; Potential Conflicts");
    text_row(&mut doc, "Receiving family support?", &form.family_support.receiving_support);
    text_row(&mut doc, "Support types", &form.family_support.support_types);
    text_row(&mut doc, "Terms / expectations", &form.family_support.terms_or_expectations);
    text_row(
        &mut doc,
        "Independence / relationship risks",
        &form.family_support.independence_concerns,
    );
    end_section(&mut doc);

    section(&mut doc, "6. Other Considerations");
    text_row(&mut doc, "Return to Australia", &form.other.return_timeline);
    doc.push_str(&format!(
        "        <dt>Concerns</dt><dd><ul>{concern_items}</ul></dd>\n"
    ));
    text_row(&mut doc, "Model type", &form.other.investment_vs_ppr);
    text_row(&mut doc, "Notes", &form.other.notes);
    end_section(&mut doc);

    section(&mut doc, "Contact &amp; Consent");
    text_row(&mut doc, "Name", &form.contact.full_name);
    text_row(&mut doc, "Email", &form.contact.email);
    text_row(&mut doc, "Phone", &form.contact.phone);
    flag_row(&mut doc, "Consent", form.contact.consent);
    end_section(&mut doc);

    doc.push_str(&format!(
        "\n      <div class=\"footer\">\n        {FOOTER_TEXT}\n      </div>\n    </div>\n\n"
    ));
    doc.push_str(TIP_LINE);
    doc.push_str("  </div>\n\n");
    doc.push_str(match mode {
        PrintMode::Download => GATED_PRINT_SCRIPT,
        PrintMode::AutoPrint => AUTO_PRINT_SCRIPT,
    });
    doc.push_str("</body>\n</html>\n");
    doc
}

// ============================================================================
// Artifacts
// ============================================================================

/// Writes `IPW_ClareBen_FactFinder.html` into `dir` and returns the path.
pub fn write_export(form: &FactFinderForm, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(HTML_EXPORT_FILENAME);
    fs::write(&path, build_document(form, PrintMode::Download))?;
    info!("HTML export written to {}", path.display());
    Ok(path)
}

/// Writes an auto-printing copy to the temp directory and opens it in the
/// default browser, which shows the print dialog. "Save as PDF" there
/// produces the final document.
pub fn open_print_preview(form: &FactFinderForm) -> io::Result<PathBuf> {
    let path = std::env::temp_dir().join(PRINT_PREVIEW_FILENAME);
    fs::write(&path, build_document(form, PrintMode::AutoPrint))?;
    super::open_in_browser(&path)?;
    info!("Print preview opened from {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::filled_form;

    #[test]
    fn test_esc_handles_each_special_character() {
        assert_eq!(esc("a&b"), "a&amp;b");
        assert_eq!(esc("<dd>"), "&lt;dd&gt;");
        assert_eq!(esc("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(esc("it's"), "it&#39;s");
    }

    #[test]
    fn test_esc_escapes_ampersand_first() {
        // "&lt;" typed by a user must not collapse into a real entity.
        assert_eq!(esc("&lt;"), "&amp;lt;");
        assert_eq!(esc("&<"), "&amp;&lt;");
    }

    #[test]
    fn test_format_list_splits_on_lines() {
        assert_eq!(
            format_list("Mosman\nCremorne"),
            "<li>Mosman</li><li>Cremorne</li>"
        );
    }

    #[test]
    fn test_format_list_drops_blank_lines_and_trims() {
        assert_eq!(format_list("  Mosman  \n\n\n Neutral Bay"), "<li>Mosman</li><li>Neutral Bay</li>");
        assert_eq!(format_list("   \n  "), "");
        assert_eq!(format_list(""), "");
    }

    #[test]
    fn test_format_list_escapes_entries() {
        assert_eq!(format_list("<b>bold</b>"), "<li>&lt;b&gt;bold&lt;/b&gt;</li>");
    }

    #[test]
    fn test_document_contains_every_section_heading() {
        let doc = render_document(&filled_form(), PrintMode::Download, "23 August 2026");
        for heading in [
            "1. Property Objectives",
            "2. Funding Position",
            "3. Income &amp; Tax Residency",
            "4. Family Planning",
            "5. Family Support &amp; Potential Conflicts",
            "6. Other Considerations",
            "Contact &amp; Consent",
        ] {
            assert!(doc.contains(heading), "missing heading {heading}");
        }
        assert!(doc.contains("Integral Private Wealth • 23 August 2026"));
        assert!(doc.contains(FOOTER_TEXT));
    }

    #[test]
    fn test_document_escapes_user_values() {
        let mut form = filled_form();
        form.other.notes = "<script>alert(\"x\")</script>".to_string();
        let doc = render_document(&form, PrintMode::Download, "23 August 2026");
        assert!(doc.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(!doc.contains("<script>alert"));
    }

    #[test]
    fn test_document_renders_flags_as_yes_no() {
        let mut form = filled_form();
        form.property.amys_apartment_option = true;
        form.contact.consent = false;
        let doc = render_document(&form, PrintMode::Download, "23 August 2026");
        assert!(doc.contains("<dt>Amy’s apartment?</dt><dd>Yes</dd>"));
        assert!(doc.contains("<dt>Consent</dt><dd>No</dd>"));
    }

    #[test]
    fn test_document_renders_concerns_in_ticked_order() {
        let mut form = FactFinderForm::default();
        form.toggle_concern("Financing while overseas");
        form.toggle_concern("Foreign purchaser duty");
        let doc = render_document(&form, PrintMode::Download, "23 August 2026");
        assert!(doc.contains(
            "<dt>Concerns</dt><dd><ul><li>Financing while overseas</li><li>Foreign purchaser duty</li></ul></dd>"
        ));
    }

    #[test]
    fn test_multiline_suburbs_become_list_items() {
        let mut form = FactFinderForm::default();
        form.property.suburbs = "Mosman\nNeutral Bay\n".to_string();
        let doc = render_document(&form, PrintMode::Download, "23 August 2026");
        assert!(doc.contains("<dt>Preferred suburbs</dt><dd><ul><li>Mosman</li><li>Neutral Bay</li></ul></dd>"));
    }

    #[test]
    fn test_download_mode_gates_printing_behind_window_name() {
        let doc = render_document(&FactFinderForm::default(), PrintMode::Download, "1 May 2026");
        assert!(doc.contains("window.name === 'IPW_PRINT'"));
    }

    #[test]
    fn test_auto_print_mode_prints_unconditionally() {
        let doc = render_document(&FactFinderForm::default(), PrintMode::AutoPrint, "1 May 2026");
        assert!(doc.contains("window.print()"));
        assert!(!doc.contains("IPW_PRINT"));
    }

    #[test]
    fn test_prepared_on_format_has_no_zero_padding() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(date.format(PREPARED_ON_FORMAT).to_string(), "3 August 2026");
    }

    #[test]
    fn test_write_export_uses_fixed_filename() {
        let dir = std::env::temp_dir().join(format!(
            "factfinder-html-export-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();

        let path = write_export(&filled_form(), &dir).unwrap();
        assert!(path.ends_with(HTML_EXPORT_FILENAME));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("<!doctype html>"));
        assert!(raw.contains("IPW_PRINT"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
