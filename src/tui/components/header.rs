//! # Header Component
//!
//! Navy brand banner shown above the form: engagement title, practice name
//! and location. Purely presentational, no props or state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::ui::IPW_NAVY;

/// Height the header needs, in rows.
pub const HEADER_HEIGHT: u16 = 3;

pub struct Header;

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default().fg(Color::White).bg(IPW_NAVY);

        let lines = vec![
            Line::from(Span::styled(
                " Clare & Ben – Online Checklist & Fact Finder",
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(" Integral Private Wealth", base)),
            Line::from(Span::styled(
                "Sydney | integralprivatewealth.com.au ",
                base,
            ))
            .alignment(Alignment::Right),
        ];

        let banner = Paragraph::new(Text::from(lines)).style(base);
        frame.render_widget(banner, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_shows_brand_lines() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Header.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Clare & Ben – Online Checklist & Fact Finder"));
        assert!(text.contains("Integral Private Wealth"));
        assert!(text.contains("Sydney | integralprivatewealth.com.au"));
    }
}
