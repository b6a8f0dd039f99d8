//! Rendering layer
//!
//! Components are stateless: they read `&AppState` and draw. Widgets are
//! reusable ratatui pieces shared by several components.

pub mod components;
pub mod widgets;
