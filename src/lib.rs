//! # rfptui - RFP Automation Dashboard
//!
//! A terminal dashboard for an RFP automation workflow, built with Ratatui.
//! This library implements an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): plain-data application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): the single pure transition function
//! - **Command** (`core::cmd`): side effects executed by the runtime
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! The demo collaborators in `infrastructure` stand in for real document
//! storage and retrieval; the core only ever sees their trait surface.
//!
//! ## Example Usage
//!
//! ```rust
//! use rfptui::core::msg::shell::ShellMsg;
//! use rfptui::core::{update, AppState, Msg};
//! use rfptui::domain::Role;
//! use rfptui::infrastructure::catalog::DemoCatalog;
//!
//! let state = AppState::from_catalog(&DemoCatalog);
//! assert_eq!(state.shell.role, Role::Sales);
//!
//! // Process messages through the pure update function
//! let (state, commands) = update(Msg::Shell(ShellMsg::CycleRole), state);
//! assert_eq!(state.shell.role, Role::Legal);
//! assert!(commands.is_empty());
//! ```

#![deny(warnings)]
#![allow(dead_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod mode;
pub mod presentation;
pub mod text;
pub mod utils;

pub use crate::core::{update, AppState, Cmd, Msg, RawMsg};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
