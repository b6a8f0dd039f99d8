use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::mode::Mode;

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Mode, HashMap<String, Style>>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Mode, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(mode, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(style_key, style_string)| (style_key, parse_style(&style_string)))
                    .collect();
                (mode, converted_inner_map)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse a style line like `"bold yellow on black"`.
///
/// Tokens before `on` set the foreground, tokens after it the background;
/// modifier names may appear anywhere. Unknown tokens are ignored.
pub fn parse_style(line: &str) -> Style {
    let mut style = Style::default();
    let mut background = false;
    for token in line.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "on" => background = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "underline" | "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "reverse" | "reversed" => style = style.add_modifier(Modifier::REVERSED),
            "crossed-out" => style = style.add_modifier(Modifier::CROSSED_OUT),
            "blink" => style = style.add_modifier(Modifier::SLOW_BLINK),
            other => {
                if let Ok(color) = Color::from_str(other) {
                    style = if background {
                        style.bg(color)
                    } else {
                        style.fg(color)
                    };
                }
            }
        }
    }
    style
}
