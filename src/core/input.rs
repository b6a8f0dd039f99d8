use crossterm::event::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};
use tui_textarea::{CursorMove, TextArea};

/// Snapshot of an editable text input.
///
/// The state itself is plain data so the update path stays pure; key events
/// are applied by rebuilding a transient [`TextArea`] around the snapshot,
/// which keeps editing behavior identical to the rendered widget without
/// holding widget state in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    lines: Vec<String>,
    cursor: (usize, usize),
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: (0, 0),
        }
    }
}

impl InputState {
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let row = lines.len().saturating_sub(1);
        let col = lines.last().map(String::len).unwrap_or(0);
        Self {
            lines,
            cursor: (row, col),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply one key event and return the resulting snapshot.
    ///
    /// Deterministic and side-effect free. Single-line inputs swallow
    /// `Enter`; the translator decides what submission means for them.
    pub fn apply_key(&self, key: KeyEvent, multiline: bool) -> InputState {
        if !multiline && key.code == KeyCode::Enter {
            return self.clone();
        }
        let mut textarea = TextArea::from(self.lines.clone());
        textarea.move_cursor(CursorMove::Jump(self.cursor.0 as u16, self.cursor.1 as u16));
        textarea.input(key);
        InputState {
            lines: textarea.lines().to_vec(),
            cursor: textarea.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(input: &InputState, text: &str, multiline: bool) -> InputState {
        text.chars().fold(input.clone(), |state, ch| {
            state.apply_key(key(KeyCode::Char(ch)), multiline)
        })
    }

    #[test]
    fn typing_appends_at_cursor() {
        let input = typed(&InputState::default(), "secur", false);
        assert_eq!(input.text(), "secur");
        assert_eq!(input.cursor(), (0, 5));
    }

    #[test]
    fn backspace_removes_last_char() {
        let input = typed(&InputState::default(), "cloud", false);
        let input = input.apply_key(key(KeyCode::Backspace), false);
        assert_eq!(input.text(), "clou");
    }

    #[test]
    fn single_line_swallows_enter() {
        let input = typed(&InputState::default(), "query", false);
        let after = input.apply_key(key(KeyCode::Enter), false);
        assert_eq!(after, input);
    }

    #[test]
    fn multiline_accepts_enter() {
        let input = typed(&InputState::default(), "first", true);
        let input = input.apply_key(key(KeyCode::Enter), true);
        let input = typed(&input, "second", true);
        assert_eq!(input.text(), "first\nsecond");
        assert_eq!(input.lines().len(), 2);
    }

    #[test]
    fn from_text_round_trips() {
        let input = InputState::from_text("a\nb\nc");
        assert_eq!(input.text(), "a\nb\nc");
        assert_eq!(input.cursor(), (2, 1));
        assert!(!input.is_blank());
        assert!(InputState::from_text("  \n ").is_blank());
    }
}
