use serde::{Deserialize, Serialize};

/// High-level input mode used for keybinding lookup.
///
/// `Editing` is active while any input of the visible panel has focus; all
/// plain keys are then routed into that input instead of the keymap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Mode {
    #[default]
    Normal,
    Editing,
}
