//! # Drawing
//!
//! Top-level frame composition. `draw_ui` renders the whole frame from
//! `App` (domain state) and `TuiState` (presentation state):
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Header: brand bar (3 rows, white on navy)   │
//! ├─────────────────────────────────────────────┤
//! │ FormView: scrollable sections and fields    │
//! │   ...                                       │
//! ├─────────────────────────────────────────────┤
//! │ error banner (1 row, only after a failure)  │
//! │ status line                                 │
//! │ key hints                                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Once a submission is accepted the frame switches to a centered
//! thank-you card until the visitor presses Enter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::header::HEADER_HEIGHT;
use crate::tui::components::{FormView, Header};

// Brand palette from the Integral Private Wealth stylesheet.
pub const IPW_NAVY: Color = Color::Rgb(0x00, 0x33, 0x66);
pub const IPW_GREY: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const IPW_BEIGE: Color = Color::Rgb(0xB4, 0xA5, 0x97);

/// Bottom row of the frame. Kept under 80 columns.
const KEY_HINTS: &str =
    " Tab move | Space toggle | ^S submit | ^J json | ^E html | ^P print | Esc quit";

const THANK_YOU_TITLE: &str = "Thank you, Clare & Ben";
const THANK_YOU_BODY: &str = "Your checklist and fact finder have been submitted. \
    We will review your information and prepare detailed modelling for our next meeting.";
const THANK_YOU_HINT: &str = "Press Enter to go back to the form";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    if app.submitted {
        let area = frame.area();
        draw_submitted(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let error_rows: u16 = if app.error.is_some() { 1 } else { 0 };
    let layout = Layout::vertical([
        Length(HEADER_HEIGHT),
        Min(0),
        Length(error_rows),
        Length(2),
    ]);
    let [header_area, form_area, error_area, footer_area] = layout.areas(frame.area());

    Header.render(frame, header_area);

    let mut form_view = FormView {
        form: &app.form,
        state: &mut tui.form_view,
    };
    form_view.render(frame, form_area);

    if let Some(error_msg) = &app.error {
        let banner = Paragraph::new(format!(" {error_msg}"))
            .style(Style::default().fg(Color::White).bg(Color::Red));
        frame.render_widget(banner, error_area);
    }

    draw_footer(frame, footer_area, app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    use Constraint::Length;
    let [status_area, hints_area] = Layout::vertical([Length(1), Length(1)]).areas(area);

    let status = Paragraph::new(format!(" {}", app.status_message))
        .style(Style::default().fg(IPW_GREY));
    frame.render_widget(status, status_area);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(hints, hints_area);
}

/// The page swaps the form for a centered card after a successful POST.
/// Same here, with Enter in place of the "Back to form" button.
fn draw_submitted(frame: &mut Frame, area: Rect) {
    use Constraint::{Length, Max};

    // Clamp to a readable column, centered.
    let [column] = Layout::horizontal([Max(64)]).flex(Flex::Center).areas(area);

    let body = Paragraph::new(THANK_YOU_BODY)
        .style(Style::default().fg(IPW_GREY))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    let body_height = body.line_count(column.width) as u16;

    let rows = Layout::vertical([
        Length(1),
        Length(1),
        Length(body_height),
        Length(1),
        Length(1),
    ])
    .flex(Flex::Center)
    .split(column);

    let title = Paragraph::new(THANK_YOU_TITLE)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    frame.render_widget(body, rows[2]);

    let hint = Paragraph::new(THANK_YOU_HINT)
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[4]);
}
