//! # Aura
//!
//! A terminal dashboard for browsing and organizing links to AI tools.
//!
//! ## Features
//! - Searchable, filterable tool directory (name + localized description)
//! - Reorderable module layout (grab a block, move it, drop it)
//! - Add-tool form with required-field checks
//! - Accent-color theming and a Zh/En locale toggle
//! - Chat widget backed by an external HTTP service
//! - Thin sign-up/sign-in/sign-out integration with an auth service
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod catalog;
pub mod cli;
pub mod constants;
pub mod i18n;
pub mod layout;
pub mod messages;
pub mod models;
pub mod network;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use catalog::{filter_entries, ToolCatalog};
pub use layout::ModuleLayout;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{FilterState, Locale, ModuleBlock, ModuleKind, Session, ToolEntry};
pub use network::NetworkActor;
pub use theme::{Accent, Theme};
