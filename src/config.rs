//! Page-level game configuration.
//!
//! Defaults cover the stock table. A page can override any subset of the
//! keys with an inline JSON block:
//!
//! ```html
//! <script id="game-config" type="application/json">
//!   { "texturePath": "assets/cards.png", "canvasWidth": 1024 }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::ConfigError;
use crate::game::GameMode;

pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Image that replaces the placeholder texture once it loads.
    pub texture_path: String,
    /// RGBA clear color of the table.
    pub clear_color: [f32; 4],
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Skips the mode menu and starts this mode (`endless` or `money`).
    pub mode: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            texture_path: "card_texture.png".to_string(),
            // Dark green felt
            clear_color: [0.0, 100.0 / 255.0, 0.0, 1.0],
            canvas_width: 800,
            canvas_height: 600,
            mode: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Mode to start without showing the menu. Unknown names are logged
    /// and ignored.
    pub fn preselected_mode(&self) -> Option<GameMode> {
        let name = self.mode.as_deref()?;
        match name.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::warn!("{e}; showing the mode menu");
                None
            }
        }
    }

    /// Reads the inline config block, falling back to defaults when it is
    /// absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("loaded game config: {config:?}");
                config
            }
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
