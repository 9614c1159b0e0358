//! Hue rule — rebind the generic `hue` tokens to a concrete color.
//!
//! Stylesheets reference `var(--p-hue9)` instead of a specific color. Adding
//! `class="hue-red"` (or `hue-<alias>`) to an element declares those twelve
//! `hue` and twelve `hueA` properties as references to the red ones, so the
//! whole subtree recolors without per-color utility classes.

use radix_colors::SHADES;

use crate::css::minify;
use crate::options::ColorAliases;
use crate::palette::Palette;

/// Class-name pattern the host matches before calling the rule.
pub const HUE_RULE_PATTERN: &str = r"^hue-(.+)$";

const HUE_CLASS_PREFIX: &str = "hue-";

/// Extract `<identifier>` from a `hue-<identifier>` class name.
///
/// Returns `None` for any other class, including a bare `hue-`.
#[must_use]
pub fn parse_hue_class(class: &str) -> Option<&str> {
    class.strip_prefix(HUE_CLASS_PREFIX).filter(|ident| !ident.is_empty())
}

/// Resolves `hue-<identifier>` classes against one preset's colors and aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueRule {
    prefix: String,
    colors: Vec<&'static str>,
    aliases: ColorAliases,
}

impl HueRule {
    #[must_use]
    pub fn new(prefix: impl Into<String>, palette: &Palette, aliases: ColorAliases) -> Self {
        Self {
            prefix: prefix.into(),
            colors: palette.names().collect(),
            aliases,
        }
    }

    /// The color an identifier binds to.
    ///
    /// Selected colors win over aliases of the same name.
    #[must_use]
    pub fn resolve_target<'a>(&'a self, ident: &'a str) -> Option<&'a str> {
        if self.colors.iter().any(|c| *c == ident) {
            Some(ident)
        } else {
            self.aliases.get(ident).map(String::as_str)
        }
    }

    /// CSS for `class`, or `None` when it is not a hue class this rule knows.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn generate(&self, class: &str) -> Option<String> {
        let ident = parse_hue_class(class)?;
        let Some(target) = self.resolve_target(ident) else {
            tracing::trace!(target: "radix.preset", class, "hue class matches no color or alias");
            return None;
        };

        let prefix = &self.prefix;
        let mut css = format!(".hue-{ident} {{\n");
        for shade in SHADES {
            css.push_str(&format!("  {prefix}hue{shade}: var({prefix}{target}{shade});\n"));
            css.push_str(&format!("  {prefix}hueA{shade}: var({prefix}{target}A{shade});\n"));
        }
        css.push('}');

        Some(minify(&css))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn rule() -> HueRule {
        let palette = Palette::select(["red", "blue"]).unwrap();
        let aliases = ColorAliases::from([
            ("danger".to_string(), "red".to_string()),
            ("blue".to_string(), "red".to_string()),
        ]);
        HueRule::new("--x-", &palette, aliases)
    }

    #[test]
    fn parse_accepts_only_hue_classes() {
        assert_eq!(parse_hue_class("hue-red"), Some("red"));
        assert_eq!(parse_hue_class("hue-hue-red"), Some("hue-red"));
        assert_eq!(parse_hue_class("hue-"), None);
        assert_eq!(parse_hue_class("hue"), None);
        assert_eq!(parse_hue_class("bg-hue-red"), None);
        assert_eq!(parse_hue_class("Hue-red"), None);
    }

    #[test]
    fn selected_color_binds_itself() {
        let css = rule().generate("hue-red").unwrap();
        assert!(css.starts_with(".hue-red { --x-hue1: var(--x-red1); --x-hueA1: var(--x-redA1);"));
        assert!(css.ends_with("--x-hue12: var(--x-red12); --x-hueA12: var(--x-redA12); }"));
    }

    #[test]
    fn alias_binds_its_target() {
        let css = rule().generate("hue-danger").unwrap();
        assert!(css.starts_with(".hue-danger {"));
        assert!(css.contains("--x-hue5: var(--x-red5);"));
        assert!(css.contains("--x-hueA5: var(--x-redA5);"));
    }

    #[test]
    fn selected_color_wins_over_alias() {
        let rule = rule();
        assert_eq!(rule.resolve_target("blue"), Some("blue"));
        assert!(rule.generate("hue-blue").unwrap().contains("var(--x-blue1)"));
    }

    #[test]
    fn exactly_24_declarations() {
        let css = rule().generate("hue-blue").unwrap();
        assert_eq!(css.matches(';').count(), 24);
        assert_eq!(css.matches("--x-hue").count() - css.matches("--x-hueA").count(), 12);
        assert_eq!(css.matches("--x-hueA").count(), 12);
        for shade in 1..=12 {
            assert!(css.contains(&format!("--x-hue{shade}: var(--x-blue{shade});")));
            assert!(css.contains(&format!("--x-hueA{shade}: var(--x-blueA{shade});")));
        }
    }

    #[test]
    #[traced_test]
    fn unknown_identifier_is_inert() {
        let rule = rule();
        assert_eq!(rule.generate("hue-green"), None);
        assert_eq!(rule.resolve_target("green"), None);
        assert!(logs_contain("hue class matches no color or alias"));
    }

    #[test]
    fn non_hue_class_is_ignored() {
        assert_eq!(rule().generate("text-red"), None);
    }

    #[test]
    fn output_is_minified() {
        let css = rule().generate("hue-red").unwrap();
        assert!(!css.contains('\n'));
        assert!(!css.contains("  "));
    }

    #[test]
    fn repeated_requests_are_identical() {
        let rule = rule();
        assert_eq!(rule.generate("hue-danger"), rule.generate("hue-danger"));
    }
}
