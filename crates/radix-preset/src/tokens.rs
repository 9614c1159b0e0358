//! Theme tokens — `var(...)` references grouped by color and shade.
//!
//! Tokens never carry color literals. They point at the custom properties
//! declared by [`gen_css`](crate::css::gen_css), so switching modes is purely
//! a matter of which CSS block applies.

use indexmap::IndexMap;
use radix_colors::{SHADE_COUNT, SHADES};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::palette::Palette;

/// Token name → 12 shade references.
pub type TokenMap = IndexMap<String, ShadeScale>;

/// Twelve property references, one per shade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShadeScale([String; SHADE_COUNT]);

impl ShadeScale {
    /// References to `{prefix}{token}1` .. `{prefix}{token}12`.
    #[must_use]
    pub fn references(prefix: &str, token: &str) -> Self {
        Self(std::array::from_fn(|i| format!("var({prefix}{token}{})", i + 1)))
    }

    /// Reference for a 1-based `shade`, or `None` outside 1..=12.
    #[must_use]
    pub fn get(&self, shade: u8) -> Option<&str> {
        let idx = usize::from(shade).checked_sub(1)?;
        self.0.get(idx).map(String::as_str)
    }

    /// `(shade, reference)` pairs in shade order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        SHADES.zip(self.0.iter().map(String::as_str))
    }
}

/// Serializes as `{ "1": "var(...)", ..., "12": "var(...)" }`, the shape the
/// host expects for a nested theme color.
impl Serialize for ShadeScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SHADE_COUNT))?;
        for (shade, reference) in self.iter() {
            map.serialize_entry(&shade, reference)?;
        }
        map.end()
    }
}

/// Token groups for every color in `palette`: `{name}` and `{name}A`.
#[must_use]
pub fn generate_colors(palette: &Palette, prefix: &str) -> TokenMap {
    let mut tokens = TokenMap::with_capacity(palette.len() * 2);
    for name in palette.names() {
        let alpha = format!("{name}A");
        tokens.insert(name.to_string(), ShadeScale::references(prefix, name));
        tokens.insert(alpha.clone(), ShadeScale::references(prefix, &alpha));
    }
    tokens
}

/// The rebindable `hue` and `hueA` groups.
///
/// Their properties are not declared by the palette CSS; a `hue-<color>`
/// class binds them. See [`HueRule`](crate::hue::HueRule).
#[must_use]
pub fn generate_hues(prefix: &str) -> TokenMap {
    let mut tokens = TokenMap::with_capacity(2);
    tokens.insert("hue".to_string(), ShadeScale::references(prefix, "hue"));
    tokens.insert("hueA".to_string(), ShadeScale::references(prefix, "hueA"));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn references_cover_all_shades() {
        let scale = ShadeScale::references("--x-", "red");
        assert_eq!(scale.get(1), Some("var(--x-red1)"));
        assert_eq!(scale.get(12), Some("var(--x-red12)"));
        assert_eq!(scale.get(0), None);
        assert_eq!(scale.get(13), None);
        assert_eq!(scale.iter().count(), 12);
    }

    #[test]
    fn colors_have_solid_and_alpha_groups() {
        let palette = Palette::select(["red", "blue"]).unwrap();
        let tokens = generate_colors(&palette, "--x-");

        let keys: Vec<_> = tokens.keys().map(String::as_str).collect();
        assert_eq!(keys, ["red", "redA", "blue", "blueA"]);

        for (name, scale) in &tokens {
            for (shade, reference) in scale.iter() {
                assert_eq!(reference, format!("var(--x-{name}{shade})"));
            }
        }
    }

    #[test]
    fn alpha_group_references_alpha_properties() {
        let palette = Palette::select(["green"]).unwrap();
        let tokens = generate_colors(&palette, "--p-");
        assert_eq!(tokens["greenA"].get(7), Some("var(--p-greenA7)"));
    }

    #[test]
    fn empty_palette_has_no_tokens() {
        assert!(generate_colors(&Palette::default(), "--p-").is_empty());
    }

    #[test]
    fn hues_are_color_independent() {
        let tokens = generate_hues("--x-");
        let keys: Vec<_> = tokens.keys().map(String::as_str).collect();
        assert_eq!(keys, ["hue", "hueA"]);
        assert_eq!(tokens["hue"].get(3), Some("var(--x-hue3)"));
        assert_eq!(tokens["hueA"].get(12), Some("var(--x-hueA12)"));
    }

    #[test]
    fn serializes_as_numbered_map() {
        let json = serde_json::to_value(ShadeScale::references("--p-", "red")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        assert_eq!(obj["1"], "var(--p-red1)");
        assert_eq!(obj["12"], "var(--p-red12)");
    }
}
