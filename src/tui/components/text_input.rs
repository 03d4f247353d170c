//! # TextInput Component
//!
//! In-place editor for the focused text field. The form view builds a fresh
//! `TextInput` whenever a text field gains focus and drops it when focus moves
//! on; every content change is reported upward so the draft stays in sync
//! keystroke by keystroke.
//!
//! The cursor is drawn as a reversed cell inside the text itself rather than
//! through `Frame::set_cursor_position`, because fields render into a
//! `ScrollView` buffer and this component never learns its final screen
//! position.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by a `TextInput`
#[derive(Debug, Clone, PartialEq)]
pub enum TextInputEvent {
    /// Buffer content changed; the parent should commit the new value
    Changed,
    /// Cursor moved without changing content
    Moved,
    /// Editing is finished (Enter on a single-line field)
    Advance,
}

/// Editor state for one text field.
///
/// Single-line fields treat Enter as "done" and flatten pasted newlines;
/// multiline fields accept Enter as a literal newline and support vertical
/// cursor movement across soft-wrapped rows.
pub struct TextInput {
    /// Text buffer
    pub buffer: String,
    /// Whether Enter inserts a newline (textarea) or finishes the field
    multiline: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Content width from the last render, used for vertical movement
    last_width: u16,
}

impl TextInput {
    const DEFAULT_WIDTH: u16 = 80;

    /// Create an editor over the field's current value, cursor at the end.
    pub fn new(initial: &str, multiline: bool) -> Self {
        Self {
            buffer: initial.to_string(),
            multiline,
            cursor: initial.len(),
            last_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Record the content width the editor was last rendered at, so vertical
    /// movement agrees with what is on screen.
    pub fn set_content_width(&mut self, width: u16) {
        if width > 0 {
            self.last_width = width;
        }
    }

    /// The buffer with the cursor cell styled `REVERSED`, split into hard
    /// lines. Rendered through a wrapping `Paragraph`, the cursor span flows
    /// to wherever soft wrapping puts it.
    pub fn styled_text(&self) -> Text<'_> {
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
        let mut lines: Vec<Line> = Vec::new();
        let mut offset = 0;

        for raw in self.buffer.split('\n') {
            let start = offset;
            let end = offset + raw.len();

            if self.cursor >= start && self.cursor <= end {
                let col = self.cursor - start;
                let mut spans = Vec::new();
                if col > 0 {
                    spans.push(Span::raw(&raw[..col]));
                }
                match raw[col..].chars().next() {
                    Some(c) => {
                        let c_end = col + c.len_utf8();
                        spans.push(Span::styled(&raw[col..c_end], cursor_style));
                        if c_end < raw.len() {
                            spans.push(Span::raw(&raw[c_end..]));
                        }
                    }
                    // Cursor past the last character of the line
                    None => spans.push(Span::styled(" ", cursor_style)),
                }
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::from(Span::raw(raw)));
            }

            offset = end + 1;
        }

        Text::from(lines)
    }

    /// Move cursor one wrapped row up or down, keeping the column where
    /// possible. Returns `false` at the first/last row so the caller can move
    /// focus to the neighbouring field instead.
    fn move_vertically(&mut self, direction: i16) -> bool {
        let width = self.last_width;
        if width == 0 || self.buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Byte length of a wrapped row plus the newline or breaking space
        // textwrap consumed after it
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let sep = self.buffer.as_bytes().get(offset + line.len());
            line.len() + usize::from(matches!(sep, Some(b'\n') | Some(b' ')))
        };

        let mut byte_offset = 0;
        let mut current_line_idx = 0;
        let mut column_in_line = 0;

        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.cursor {
                current_line_idx = idx;
                column_in_line = self.cursor - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        let mut target_line_start = 0;
        for line in lines.iter().take(target_line_idx) {
            target_line_start += line_byte_span(line, target_line_start);
        }

        let target_column = column_in_line.min(lines[target_line_idx].len());
        self.cursor = target_line_start + target_column;

        true
    }
}

impl EventHandler for TextInput {
    type Event = TextInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(TextInputEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line fields flatten pasted newlines to spaces
                let text = if self.multiline {
                    text.clone()
                } else {
                    text.replace('\n', " ")
                };
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(TextInputEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(TextInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(TextInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Enter => {
                if self.multiline {
                    self.buffer.insert(self.cursor, '\n');
                    self.cursor += 1;
                    Some(TextInputEvent::Changed)
                } else {
                    Some(TextInputEvent::Advance)
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(TextInputEvent::Moved)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(TextInputEvent::Moved)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    TextInputEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    TextInputEvent::Moved
                })
            }
            // On a single-line field these fall through as None and the form
            // view turns them into focus moves
            TuiEvent::CursorUp => self.move_vertically(-1).then_some(TextInputEvent::Moved),
            TuiEvent::CursorDown => self.move_vertically(1).then_some(TextInputEvent::Moved),
            _ => None,
        }
    }
}

/// Build textwrap options matching how the form view wraps field content.
fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
