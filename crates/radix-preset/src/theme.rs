//! Host theme — the object the preset's theme hook writes `colors` into.
//!
//! Only `colors` is touched. Any other theme fields the host carries are
//! kept as raw JSON and passed through unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::{ShadeScale, TokenMap};

/// Flat tokens every preset adds after its generated groups.
pub const SEMANTIC_COLORS: [(&str, &str); 5] = [
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("inherit", "inherit"),
];

/// One entry of a theme's color table.
///
/// Host tables are recursive (`{"brand": {"DEFAULT": .., "dark": {..}}}`), so
/// nested entries hold further `ThemeColor`s. Leaves that are not strings
/// (numbers, booleans, arrays) are carried as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A single CSS value (`"#ffffff"`, `"currentColor"`).
    Value(String),
    /// A generated group of 12 shade references.
    #[serde(skip_deserializing)]
    Scale(ShadeScale),
    /// A host-defined nested mapping, kept as-is.
    Nested(IndexMap<String, ThemeColor>),
    /// Any other host value, passed through untouched.
    Raw(serde_json::Value),
}

impl From<ShadeScale> for ThemeColor {
    fn from(scale: ShadeScale) -> Self {
        Self::Scale(scale)
    }
}

impl From<&str> for ThemeColor {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

/// Color name → color, in insertion order.
pub type ThemeColors = IndexMap<String, ThemeColor>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: ThemeColors,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Theme {
    /// A theme with only a color table.
    #[must_use]
    pub fn with_colors(colors: ThemeColors) -> Self {
        Self {
            colors,
            extra: serde_json::Map::new(),
        }
    }
}

/// Merge token groups and the semantic colors, later layers overriding
/// earlier ones.
///
/// An overridden key keeps the position of its first insertion.
#[must_use]
pub fn layer_colors<'a, I>(layers: I) -> ThemeColors
where
    I: IntoIterator<Item = &'a TokenMap>,
{
    let mut colors = ThemeColors::new();
    for layer in layers {
        for (name, scale) in layer {
            colors.insert(name.clone(), ThemeColor::from(scale.clone()));
        }
    }
    for (name, value) in SEMANTIC_COLORS {
        colors.insert(name.to_string(), ThemeColor::from(value));
    }
    colors
}

/// Append host colors that `generated` does not already define.
///
/// Generated entries always win; nested groups are never merged key by key.
/// Returns how many host entries were appended.
pub fn extend_with_host(generated: &mut ThemeColors, host: ThemeColors) -> usize {
    let before = generated.len();
    for (name, color) in host {
        generated.entry(name).or_insert(color);
    }
    generated.len() - before
}
