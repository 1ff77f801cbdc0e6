//! GUI Configuration
//!
//! Optional JSON configuration for widget colors, default text size, and
//! border tile assets. Loaded the same way as any other config file:
//! `GuiConfig::load_from_file("assets/gui.json")`.

use crate::gui::border::BorderTiles;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    /// Text color, RGBA.
    pub foreground: [u8; 4],
    /// Widget background color, RGBA.
    pub background: [u8; 4],
    /// Default text size for new widgets.
    pub text_size: u32,
    /// Path to the button corner tile image; `None` uses the built-in tile.
    pub corner_tile: Option<String>,
    /// Path to the button side tile image; `None` uses the built-in tile.
    pub side_tile: Option<String>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        GuiConfig {
            foreground: [0, 0, 0, 255],
            background: [220, 220, 230, 255],
            text_size: 16,
            corner_tile: None,
            side_tile: None,
        }
    }
}

impl GuiConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn foreground_color(&self) -> Color {
        let [r, g, b, a] = self.foreground;
        Color::RGBA(r, g, b, a)
    }

    pub fn background_color(&self) -> Color {
        let [r, g, b, a] = self.background;
        Color::RGBA(r, g, b, a)
    }

    /// Builds the border tile pair: both paths present loads them from
    /// disk, otherwise the built-in tiles are used.
    pub fn border_tiles(&self) -> Result<BorderTiles, String> {
        match (&self.corner_tile, &self.side_tile) {
            (Some(corner), Some(side)) => BorderTiles::load(corner, side),
            _ => Ok(BorderTiles::default()),
        }
    }
}
