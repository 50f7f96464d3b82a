//! Colour theme mapping tones to concrete colours.

use super::Tone;
use crate::config::ConfigError;
use crate::games::tictactoe::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hex colours (`#RRGGBB`) for each tone.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colour for player X.
    x: String,
    /// Colour for player O.
    o: String,
    /// Colour for draws.
    neutral: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: "#FFA500".to_string(),
            o: "#800080".to_string(),
            neutral: "#666666".to_string(),
        }
    }
}

impl Theme {
    /// Returns the hex colour for a tone.
    pub fn color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Player(Player::X) => &self.x,
            Tone::Player(Player::O) => &self.o,
            Tone::Neutral => &self.neutral,
        }
    }

    /// Checks that every colour is a `#RRGGBB` hex string.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("x", &self.x), ("o", &self.o), ("neutral", &self.neutral)] {
            if !is_hex_color(value) {
                return Err(ConfigError::new(format!(
                    "theme.{} must be a #RRGGBB colour, got {:?}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        let theme = Theme::default();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.color(Tone::Player(Player::X)), "#FFA500");
        assert_eq!(theme.color(Tone::Player(Player::O)), "#800080");
        assert_eq!(theme.color(Tone::Neutral), "#666666");
    }

    #[test]
    fn test_hex_color_check() {
        assert!(is_hex_color("#a0B1c2"));
        assert!(!is_hex_color("a0b1c2"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
    }
}
