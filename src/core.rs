//! Elm-style application core
//!
//! - [`state`] holds the full application state as plain data
//! - [`msg`] describes every event that can change it
//! - [`update()`] is the single pure transition function
//! - [`cmd`] describes side effects for the runtime to execute
//! - [`translator`] turns raw terminal events into domain messages

pub mod cmd;
pub mod input;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;

pub use cmd::Cmd;
pub use msg::Msg;
pub use raw_msg::RawMsg;
pub use state::AppState;
pub use update::update;
