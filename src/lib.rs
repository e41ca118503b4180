//! Light/dark theme toggle for a web page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page contract is small: the document root carries a boolean `dark`
//! class, one control flips the theme, one element shows the glyph for the
//! action that control will perform next, and localStorage remembers the
//! choice across loads. This crate owns that contract end to end: a
//! framework-agnostic controller that compiles and tests natively, plus
//! web-sys collaborator implementations and a one-call mount path behind
//! the `web` feature.

pub mod controller;
pub mod store;
pub mod theme;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod mount;

pub use controller::{DocumentRoot, Indicator, ThemeController};
pub use store::PreferenceStore;
pub use theme::Theme;
