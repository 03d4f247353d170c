use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props-and-state pattern:
/// - They receive external data via props (struct fields set by the parent).
/// - They may hold internal state (focus, cursors, layout caches).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can update internal
/// caches (e.g. block heights) and presentation state (e.g. scroll offsets)
/// during the render pass. This aligns with Ratatui's `StatefulWidget`
/// pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// High-level event the component reports back to its parent.
    type Event;

    /// Apply one `TuiEvent`. Returns `None` when the event was ignored or
    /// only changed internal state the parent does not care about.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
