pub mod badge;
pub mod filter_bar;
pub mod status_bar;
pub mod tab_bar;

pub use filter_bar::FilterBarWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
