//! # FormView Component
//!
//! The scrollable intake form: seven section cards rendered top to bottom
//! inside a `ScrollView`, with one focused field at a time.
//!
//! ## Responsibilities
//!
//! - Hold the flattened focus order and move focus with Tab/Shift+Tab/arrows
//! - Route events to the focused field's editor (text), or interpret them as
//!   toggles and option cycling (flags, selects, concerns)
//! - Emit `FormEvent`s for every committed change so the reducer owns the data
//! - Keep the focused field visible by adjusting the scroll offset
//!
//! ## State Ownership
//!
//! `FormView` is rebuilt each frame with fresh props; `FormViewState` persists
//! in the parent TUI state. Field values live in the core `App` and arrive here
//! as props, so the view never owns form data beyond the focused editor's
//! buffer.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::form::{CONCERN_OPTIONS, FactFinderForm, FlagField, SelectField, TextField};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_input::{TextInput, TextInputEvent};
use crate::tui::event::TuiEvent;
use crate::tui::ui::{IPW_BEIGE, IPW_GREY};

/// What a focus stop edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line input; Enter moves to the next field
    Text(TextField),
    /// Multi-line textarea; Enter inserts a newline
    Multiline(TextField),
    /// Fixed options cycled with Left/Right
    Select(SelectField),
    /// Boolean toggled with Space or Enter
    Flag(FlagField),
    /// One row of the concerns checklist
    Concern(usize),
}

/// One focusable row of the form.
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// One section card of the form.
pub struct SectionSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn text(label: &'static str, placeholder: &'static str, field: TextField) -> FieldSpec {
    FieldSpec {
        label,
        placeholder,
        required: false,
        kind: FieldKind::Text(field),
    }
}

const fn required(label: &'static str, placeholder: &'static str, field: TextField) -> FieldSpec {
    FieldSpec {
        label,
        placeholder,
        required: true,
        kind: FieldKind::Text(field),
    }
}

const fn area(label: &'static str, placeholder: &'static str, field: TextField) -> FieldSpec {
    FieldSpec {
        label,
        placeholder,
        required: false,
        kind: FieldKind::Multiline(field),
    }
}

const fn select(label: &'static str, field: SelectField) -> FieldSpec {
    FieldSpec {
        label,
        placeholder: "",
        required: false,
        kind: FieldKind::Select(field),
    }
}

const fn flag(label: &'static str, field: FlagField) -> FieldSpec {
    FieldSpec {
        label,
        placeholder: "",
        required: false,
        kind: FieldKind::Flag(field),
    }
}

const fn concern(index: usize) -> FieldSpec {
    FieldSpec {
        label: CONCERN_OPTIONS[index],
        placeholder: "",
        required: false,
        kind: FieldKind::Concern(index),
    }
}

/// The intake form, sections and fields in page order.
pub const FORM_LAYOUT: &[SectionSpec] = &[
    SectionSpec {
        title: "1. Property Objectives",
        subtitle: "This helps us define the brief and purchase timing.",
        fields: &[
            text(
                "Preferred budget range (AUD)",
                "e.g., $1.6m – $2.2m",
                TextField::Budget,
            ),
            text(
                "Desired purchase timeframe",
                "e.g., within 6–12 months",
                TextField::Timeframe,
            ),
            area(
                "Preferred suburbs or locations",
                "List suburbs/areas and any non-negotiables",
                TextField::Suburbs,
            ),
            area(
                "Preferred property types",
                "e.g., freestanding house, townhouse, apartment (minimum beds/baths)",
                TextField::PropertyTypes,
            ),
            flag(
                "Consider Amy’s apartment as an option",
                FlagField::AmysApartment,
            ),
            flag("Focus on a family home", FlagField::FocusFamilyHome),
        ],
    },
    SectionSpec {
        title: "2. Funding Position",
        subtitle: "We’ll map resources for deposit, costs and buffers.",
        fields: &[
            text("Current savings – AUD", "$", TextField::SavingsAud),
            text(
                "Current savings – Overseas",
                "$ (currency)",
                TextField::SavingsOverseas,
            ),
            area(
                "Expected inheritances or gifts (timing & amounts)",
                "",
                TextField::Inheritances,
            ),
            area(
                "Existing mortgages (balances, repayments, rates, offsets/redraws)",
                "",
                TextField::Mortgages,
            ),
            area(
                "Shareholdings (e.g., Uber – value, vesting)",
                "",
                TextField::Shares,
            ),
            text(
                "Other liquid assets available for deposit",
                "$",
                TextField::OtherLiquid,
            ),
        ],
    },
    SectionSpec {
        title: "3. Income & Tax Residency",
        subtitle: "For borrowing capacity and tax structuring.",
        fields: &[
            area(
                "Employment, salaries and benefits",
                "",
                TextField::SalariesBenefits,
            ),
            area("RSUs, stock options or bonuses", "", TextField::Equity),
            select(
                "Intended residency status for purchase",
                SelectField::Residency,
            ),
            area(
                "Any tax advice already received on a non-resident purchase",
                "",
                TextField::TaxAdvice,
            ),
        ],
    },
    SectionSpec {
        title: "4. Family Planning",
        subtitle: "Helps us set timing, location and buffers.",
        fields: &[
            select(
                "Plan to have children in the next 2–4 years?",
                SelectField::ChildrenPlan,
            ),
            area(
                "Planned living arrangements during family expansion (overseas or Australia)",
                "",
                TextField::LivingArrangements,
            ),
            area(
                "Schooling/childcare considerations affecting timing or location",
                "",
                TextField::SchoolingChildcare,
            ),
        ],
    },
    SectionSpec {
        title: "5. Family Support & Potential Conflicts",
        subtitle: "If receiving help from family, we will model the structure, risks and independence.",
        fields: &[
            select(
                "Are you considering accepting a favour/assistance from family?",
                SelectField::ReceivingSupport,
            ),
            area(
                "What form could this take? (e.g., gifted equity, interest‑free loan, guarantor, rent discount)",
                "",
                TextField::SupportTypes,
            ),
            area(
                "Any terms or expectations attached? (repayment, control, decision rights, time limits)",
                "",
                TextField::TermsOrExpectations,
            ),
            area(
                "Do you have concerns about independence, influence or relationship risk?",
                "",
                TextField::IndependenceConcerns,
            ),
        ],
    },
    SectionSpec {
        title: "6. Other Considerations",
        subtitle: "Anything else that may shape the strategy.",
        fields: &[
            text(
                "Expected timeline for returning to Australia",
                "e.g., mid-2027",
                TextField::ReturnTimeline,
            ),
            concern(0),
            concern(1),
            concern(2),
            concern(3),
            concern(4),
            select("Model what type of purchase?", SelectField::PurchaseModel),
            area(
                "Anything else you would like us to consider",
                "",
                TextField::Notes,
            ),
        ],
    },
    SectionSpec {
        title: "Contact & Consent",
        subtitle: "",
        fields: &[
            required("Your full name", "Clare Smith", TextField::FullName),
            required("Email", "clare@example.com", TextField::Email),
            text("Contact number", "+61 ...", TextField::Phone),
            flag(
                "I consent to Integral Private Wealth using this information to prepare modelling and advice.",
                FlagField::Consent,
            ),
        ],
    },
];

const PRIVACY_NOTE: &str = "Your information is handled confidentially by Integral Private \
Wealth and used solely to prepare your advice. This form does not constitute personal advice.";

/// Total number of focus stops.
fn field_count() -> usize {
    FORM_LAYOUT.iter().map(|s| s.fields.len()).sum()
}

/// Look up a focus stop by flattened index.
fn field_at(index: usize) -> &'static FieldSpec {
    let mut i = index;
    for section in FORM_LAYOUT {
        if i < section.fields.len() {
            return &section.fields[i];
        }
        i -= section.fields.len();
    }
    // Focus is always kept in range; first field as a harmless fallback
    &FORM_LAYOUT[0].fields[0]
}

/// High-level events emitted by the form view
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A text field's content changed
    Edited(TextField, String),
    /// A boolean flag was flipped
    Toggled(FlagField),
    /// A select stepped forwards or backwards through its options
    Cycled(SelectField, i8),
    /// A concerns checklist row was ticked or unticked
    ConcernToggled(usize),
}

/// Focus, editor and scroll state for the form view.
/// Must be persisted in the parent TuiState.
pub struct FormViewState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Index into the flattened focus order
    focus: usize,
    /// Editor over the focused field, present only for text kinds
    editor: Option<TextInput>,
    /// When set, the next render brings the focused field into view
    scroll_to_focus: bool,
    /// Last known viewport height (for scroll clamping between frames)
    viewport_height: u16,
}

impl FormViewState {
    pub fn new(form: &FactFinderForm) -> Self {
        let mut state = Self {
            scroll_state: ScrollViewState::default(),
            focus: 0,
            editor: None,
            scroll_to_focus: true,
            viewport_height: 0,
        };
        state.rebuild_editor(form);
        state
    }

    pub fn focused_field(&self) -> &'static FieldSpec {
        field_at(self.focus)
    }

    /// Build (or drop) the editor to match the newly focused field.
    fn rebuild_editor(&mut self, form: &FactFinderForm) {
        self.editor = match self.focused_field().kind {
            FieldKind::Text(field) => Some(TextInput::new(field.get(form), false)),
            FieldKind::Multiline(field) => Some(TextInput::new(field.get(form), true)),
            _ => None,
        };
    }

    pub fn focus_next(&mut self, form: &FactFinderForm) {
        self.focus = (self.focus + 1) % field_count();
        self.after_focus_change(form);
    }

    pub fn focus_prev(&mut self, form: &FactFinderForm) {
        self.focus = self.focus.checked_sub(1).unwrap_or(field_count() - 1);
        self.after_focus_change(form);
    }

    fn after_focus_change(&mut self, form: &FactFinderForm) {
        self.rebuild_editor(form);
        self.scroll_to_focus = true;
    }

    /// Route one terminal event. The focused editor gets first claim; anything
    /// it does not consume is interpreted as navigation or a toggle.
    pub fn handle_event(&mut self, event: &TuiEvent, form: &FactFinderForm) -> Option<FormEvent> {
        match event {
            TuiEvent::FocusNext => {
                self.focus_next(form);
                return None;
            }
            TuiEvent::FocusPrev => {
                self.focus_prev(form);
                return None;
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                return None;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                return None;
            }
            _ => {}
        }

        let editor_result = self
            .editor
            .as_mut()
            .and_then(|editor| editor.handle_event(event).map(|ev| (ev, editor.buffer.clone())));
        if let Some((input_event, buffer)) = editor_result {
            return match input_event {
                TextInputEvent::Changed => match self.focused_field().kind {
                    FieldKind::Text(field) | FieldKind::Multiline(field) => {
                        Some(FormEvent::Edited(field, buffer))
                    }
                    _ => None,
                },
                TextInputEvent::Moved => None,
                TextInputEvent::Advance => {
                    self.focus_next(form);
                    None
                }
            };
        }

        match (self.focused_field().kind, event) {
            // Up/Down the editor did not consume walk the focus order
            (_, TuiEvent::CursorUp) => {
                self.focus_prev(form);
                None
            }
            (_, TuiEvent::CursorDown) => {
                self.focus_next(form);
                None
            }
            (FieldKind::Select(field), TuiEvent::CursorLeft) => Some(FormEvent::Cycled(field, -1)),
            (
                FieldKind::Select(field),
                TuiEvent::CursorRight | TuiEvent::InputChar(' ') | TuiEvent::Enter,
            ) => Some(FormEvent::Cycled(field, 1)),
            (FieldKind::Flag(field), TuiEvent::InputChar(' ') | TuiEvent::Enter) => {
                Some(FormEvent::Toggled(field))
            }
            (FieldKind::Concern(index), TuiEvent::InputChar(' ') | TuiEvent::Enter) => {
                Some(FormEvent::ConcernToggled(index))
            }
            _ => None,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self, total_height: u16) {
        let max_y = total_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll so the block spanning `item_top..item_bottom` is fully visible.
    /// If the block is taller than the viewport, align its top edge.
    fn bring_into_view(&mut self, item_top: u16, item_bottom: u16) {
        let offset_y = self.scroll_state.offset().y;
        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

/// The form view, recreated each frame with fresh props.
pub struct FormView<'a> {
    pub form: &'a FactFinderForm,
    pub state: &'a mut FormViewState,
}

struct RenderedBlock<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> Component for FormView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        if let Some(editor) = self.state.editor.as_mut() {
            // Vertical cursor movement must agree with the wrap width inside
            // the field borders
            editor.set_content_width(content_width.saturating_sub(2));
        }

        // Build all blocks and locate the focused one
        let mut blocks: Vec<RenderedBlock> = Vec::new();
        let mut focus_bounds = (0u16, 0u16);
        let mut y: u16 = 0;
        let mut field_idx = 0usize;

        for section in FORM_LAYOUT {
            let header = section_header(section);
            y += header.height;
            blocks.push(header);

            for spec in section.fields {
                let focused = field_idx == self.state.focus;
                let editor = if focused {
                    self.state.editor.as_ref()
                } else {
                    None
                };
                let block = field_block(spec, self.form, editor, focused, content_width);
                if focused {
                    focus_bounds = (y, y + block.height);
                }
                y += block.height;
                blocks.push(block);
                field_idx += 1;
            }
        }

        let note = privacy_note(content_width);
        y += note.height;
        blocks.push(note);

        let total_height = y;

        // Scroll bookkeeping before rendering
        self.state.viewport_height = area.height;
        if self.state.scroll_to_focus {
            self.state.scroll_to_focus = false;
            self.state.bring_into_view(focus_bounds.0, focus_bounds.1);
        }
        self.state.clamp_scroll(total_height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for block in &blocks {
            let rect = Rect::new(0, y_offset, content_width, block.height);
            scroll_view.render_widget(block.paragraph.clone(), rect);
            y_offset += block.height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

fn section_header(section: &'static SectionSpec) -> RenderedBlock<'static> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            section.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !section.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            section.subtitle,
            Style::default().fg(IPW_GREY),
        )));
    }
    lines.push(Line::raw(""));

    let height = lines.len() as u16;
    RenderedBlock {
        paragraph: Paragraph::new(Text::from(lines)),
        height,
    }
}

fn field_block<'a>(
    spec: &'static FieldSpec,
    form: &'a FactFinderForm,
    editor: Option<&'a TextInput>,
    focused: bool,
    content_width: u16,
) -> RenderedBlock<'a> {
    match spec.kind {
        FieldKind::Text(field) | FieldKind::Multiline(field) => {
            boxed_field(spec, field.get(form), editor, focused, content_width)
        }
        FieldKind::Select(field) => {
            let value = Text::from(format!("‹ {} ›", field.get(form)));
            boxed_value(spec, value, focused, content_width)
        }
        FieldKind::Flag(field) => {
            let line = check_row(spec.label, field.get(form), focused);
            plain_row(Text::from(line), content_width)
        }
        FieldKind::Concern(index) => {
            let ticked = form
                .other
                .concerns
                .iter()
                .any(|c| c == CONCERN_OPTIONS[index]);
            let row = check_row(spec.label, ticked, focused);
            let text = if index == 0 {
                // The checklist carries one shared heading above its first row
                Text::from(vec![
                    Line::from(Span::styled(
                        "Concerns",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    row,
                ])
            } else {
                Text::from(row)
            };
            plain_row(text, content_width)
        }
    }
}

/// A bordered text field: the editor's buffer when focused, otherwise the
/// stored value or a dim placeholder.
fn boxed_field<'a>(
    spec: &'static FieldSpec,
    value: &'a str,
    editor: Option<&'a TextInput>,
    focused: bool,
    content_width: u16,
) -> RenderedBlock<'a> {
    let content = match editor {
        Some(editor) => editor.styled_text(),
        None if value.is_empty() && !spec.placeholder.is_empty() => Text::from(Span::styled(
            spec.placeholder,
            Style::default().add_modifier(Modifier::DIM),
        )),
        None => Text::from(value),
    };
    boxed_value(spec, content, focused, content_width)
}

fn boxed_value<'a>(
    spec: &'static FieldSpec,
    content: Text<'a>,
    focused: bool,
    content_width: u16,
) -> RenderedBlock<'a> {
    let border_style = if focused {
        Style::default().fg(IPW_BEIGE)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let mut title = vec![Span::raw(spec.label)];
    if spec.required {
        title.push(Span::styled(" *", Style::default().fg(ratatui::style::Color::Red)));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::bordered()
                .title(Line::from(title))
                .border_style(border_style)
                .title_style(border_style),
        )
        .wrap(Wrap { trim: false });

    let mut height = paragraph.line_count(content_width) as u16;
    if matches!(spec.kind, FieldKind::Multiline(_)) {
        // Textareas keep room for a few lines even when empty
        height = height.max(5);
    }

    RenderedBlock { paragraph, height }
}

/// An unboxed checkbox row for flags and concerns.
fn check_row(label: &'static str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if focused {
        Style::default().fg(IPW_BEIGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{marker}{mark}{label}"), style))
}

fn plain_row(text: Text<'_>, content_width: u16) -> RenderedBlock<'_> {
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let height = paragraph.line_count(content_width) as u16;
    RenderedBlock { paragraph, height }
}

fn privacy_note(content_width: u16) -> RenderedBlock<'static> {
    let paragraph = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(PRIVACY_NOTE, Style::default().fg(IPW_GREY))),
    ]))
    .wrap(Wrap { trim: false });
    let height = paragraph.line_count(content_width) as u16;
    RenderedBlock { paragraph, height }
}
