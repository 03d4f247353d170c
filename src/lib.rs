//! Fact finder library exports for testing

pub mod core;
pub mod export;
pub mod submit;
pub mod tui;

#[cfg(test)]
pub mod test_support;
