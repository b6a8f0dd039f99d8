//! Process boundaries: the terminal, configuration files and the demo
//! collaborators that stand in for real document storage and retrieval.

pub mod catalog;
pub mod oracle;
pub mod tui;
