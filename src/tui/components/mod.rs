//! # TUI Components
//!
//! UI components for the terminal intake form.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Header`: Navy brand banner above the form
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `FormView`: Scrollable section cards with a single focused field
//! - `TextInput`: In-place editor for the focused text field
//!
//! External data always arrives as props (the core `App` owns the form), and
//! committed changes travel back up as events. Each component file co-locates
//! its state types, event types, rendering and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── header.rs      (brand banner)
//! ├── form_view.rs   (sections, fields, focus and scrolling)
//! └── text_input.rs  (editing machinery for text fields)
//! ```

pub mod form_view;
pub mod header;
pub mod text_input;

pub use form_view::{FORM_LAYOUT, FormEvent, FormView, FormViewState};
pub use header::Header;
pub use text_input::{TextInput, TextInputEvent};
