//! Visual configuration for the dropdown.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::ListAlignment;
use crate::types::{Color, TextStyle};

/// Every style knob the dropdown exposes.
///
/// Deserializes from JSON with any subset of fields; missing fields keep their
/// defaults. Colors use the string forms accepted by [`Color`]'s `FromStr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub item_font: TextStyle,
    pub item_text_color: Color,
    pub item_background: Color,
    /// Background shown while a row is pressed
    pub item_selected_background: Color,
    pub scrim_tint: Color,
    pub alignment: ListAlignment,
    /// Height of every row, in cells
    pub row_height: u16,
    pub border_color: Color,
    /// 0 for no border, 1 for a light border, 2 or more for a heavy one
    pub border_width: u16,
    pub separators: bool,
    /// Any non-zero radius rounds the corners of a light border
    pub corner_radius: u16,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            item_font: TextStyle::new(),
            item_text_color: Color::BLACK,
            item_background: Color::WHITE,
            item_selected_background: Color::LIGHT_GRAY,
            scrim_tint: Color::BLACK.alpha(0.1),
            alignment: ListAlignment::Anchored,
            row_height: 1,
            border_color: Color::GRAY.alpha(0.3),
            border_width: 1,
            separators: false,
            corner_radius: 8,
        }
    }
}

impl Appearance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let appearance: Self = serde_json::from_str(json)?;
        appearance.validate()?;
        Ok(appearance)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[dropdown] loading appearance from {}", path.display());
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::invalid("row_height", "must be at least 1"));
        }
        Ok(())
    }

    pub fn item_font(mut self, font: TextStyle) -> Self {
        self.item_font = font;
        self
    }

    pub fn item_text_color(mut self, color: Color) -> Self {
        self.item_text_color = color;
        self
    }

    pub fn item_background(mut self, color: Color) -> Self {
        self.item_background = color;
        self
    }

    pub fn item_selected_background(mut self, color: Color) -> Self {
        self.item_selected_background = color;
        self
    }

    pub fn scrim_tint(mut self, color: Color) -> Self {
        self.scrim_tint = color;
        self
    }

    pub fn alignment(mut self, alignment: ListAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn row_height(mut self, row_height: u16) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn border(mut self, color: Color, width: u16) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }

    pub fn separators(mut self, separators: bool) -> Self {
        self.separators = separators;
        self
    }

    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// Which part of the dropdown a style change affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invalidation {
    /// Scrim tint
    Scrim,
    /// Row content: labels, fonts, row colors, separators
    ListRows,
    /// Border and corners around the list
    ListChrome,
    /// List frame; takes effect on the next `open()`
    ListGeometry,
}

/// Invalidations queued since the last refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingRefresh {
    pub scrim: bool,
    pub rows: bool,
    pub chrome: bool,
    pub geometry: bool,
}

impl PendingRefresh {
    pub const fn all() -> Self {
        Self {
            scrim: true,
            rows: true,
            chrome: true,
            geometry: true,
        }
    }

    pub fn mark(&mut self, invalidation: Invalidation) {
        match invalidation {
            Invalidation::Scrim => self.scrim = true,
            Invalidation::ListRows => self.rows = true,
            Invalidation::ListChrome => self.chrome = true,
            Invalidation::ListGeometry => self.geometry = true,
        }
    }

    pub fn contains(&self, invalidation: Invalidation) -> bool {
        match invalidation {
            Invalidation::Scrim => self.scrim,
            Invalidation::ListRows => self.rows,
            Invalidation::ListChrome => self.chrome,
            Invalidation::ListGeometry => self.geometry,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let appearance =
            Appearance::from_json(r##"{ "row_height": 3, "item_text_color": "#ff0000" }"##)
                .unwrap();
        assert_eq!(appearance.row_height, 3);
        assert_eq!(appearance.item_text_color, Color::rgb(255, 0, 0));
        assert_eq!(appearance.item_background, Color::WHITE);
        assert_eq!(appearance.alignment, ListAlignment::Anchored);
    }

    #[test]
    fn alignment_uses_snake_case() {
        let appearance = Appearance::from_json(r#"{ "alignment": "from_zero" }"#).unwrap();
        assert_eq!(appearance.alignment, ListAlignment::FromZero);
    }

    #[test]
    fn zero_row_height_is_rejected() {
        let err = Appearance::from_json(r#"{ "row_height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "row_height", .. }));
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Appearance::from_json(r#"{ "scrim_tint": "mauve" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_round_trips() {
        let appearance = Appearance::new()
            .item_font(TextStyle::new().bold())
            .separators(true)
            .alignment(ListAlignment::FromZero);
        let json = appearance.to_json().unwrap();
        assert_eq!(Appearance::from_json(&json).unwrap(), appearance);
    }

    #[test]
    fn pending_refresh_take_clears() {
        let mut pending = PendingRefresh::default();
        pending.mark(Invalidation::Scrim);
        pending.mark(Invalidation::ListGeometry);
        let taken = pending.take();
        assert!(taken.contains(Invalidation::Scrim));
        assert!(taken.contains(Invalidation::ListGeometry));
        assert!(!taken.contains(Invalidation::ListRows));
        assert!(pending.is_empty());
    }
}
