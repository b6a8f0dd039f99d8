use serde::{Deserialize, Serialize};

/// Cursor over a list whose length changes as filters narrow it.
///
/// All movements saturate at the ends; an empty list always deselects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn selected(&self) -> Option<usize> {
        self.index
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn up(&mut self, len: usize) {
        self.index = match self.index {
            _ if len == 0 => None,
            Some(i) if i > 0 => Some(i - 1),
            _ => Some(0),
        };
    }

    pub fn down(&mut self, len: usize) {
        self.index = match self.index {
            _ if len == 0 => None,
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    pub fn top(&mut self, len: usize) {
        self.index = if len == 0 { None } else { Some(0) };
    }

    pub fn bottom(&mut self, len: usize) {
        self.index = if len == 0 { None } else { Some(len - 1) };
    }

    /// Keep the cursor valid after the underlying list was refiltered.
    pub fn clamp(&mut self, len: usize) {
        self.index = match self.index {
            Some(_) if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }
}
