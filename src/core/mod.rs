//! # Core Application Logic
//!
//! This module contains the fact finder's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Form (the record)    │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.*  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Export   │      │   Submit   │
//!     │  Adapter   │      │ JSON/HTML  │      │  (webhook) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! *`draft` and `config` are the two file-backed exceptions; both stay
//! behind plain functions the adapters call.
//!
//! ## Modules
//!
//! - [`form`]: The `FactFinderForm` record and typed field addresses
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`, everything that can happen
//! - [`validate`]: The submission gate
//! - [`draft`]: Autosaved draft on disk
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod draft;
pub mod form;
pub mod state;
pub mod validate;
