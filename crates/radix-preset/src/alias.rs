//! Alias resolution — extra names for selected colors.
//!
//! An alias is a pure re-keying: `primary → violet` copies the `violet` and
//! `violetA` token groups under `primary` and `primaryA`. No new custom
//! properties are declared, so an alias always tracks its target in both
//! modes.

use crate::error::{PresetError, Result};
use crate::options::ColorAliases;
use crate::tokens::TokenMap;

/// Re-key `colors` under each alias name, in alias order.
///
/// # Errors
///
/// Returns [`PresetError::UnknownAliasTarget`] if a target has no token group
/// in `colors`.
pub fn generate_aliases(colors: &TokenMap, aliases: &ColorAliases) -> Result<TokenMap> {
    let mut out = TokenMap::with_capacity(aliases.len() * 2);
    for (alias, target) in aliases {
        let missing = || PresetError::unknown_alias_target(alias, target);
        let solid = colors.get(target.as_str()).ok_or_else(missing)?;
        let alpha = colors.get(&format!("{target}A")).ok_or_else(missing)?;
        out.insert(alias.clone(), solid.clone());
        out.insert(format!("{alias}A"), alpha.clone());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::tokens::generate_colors;
    use pretty_assertions::assert_eq;

    fn colors() -> TokenMap {
        generate_colors(&Palette::select(["violet", "slate"]).unwrap(), "--x-")
    }

    #[test]
    fn alias_equals_target() {
        let colors = colors();
        let aliases = ColorAliases::from([
            ("primary".to_string(), "violet".to_string()),
            ("base".to_string(), "slate".to_string()),
        ]);
        let out = generate_aliases(&colors, &aliases).unwrap();

        assert_eq!(out["primary"], colors["violet"]);
        assert_eq!(out["primaryA"], colors["violetA"]);
        assert_eq!(out["base"], colors["slate"]);
        assert_eq!(out["baseA"], colors["slateA"]);
    }

    #[test]
    fn output_follows_alias_order() {
        let aliases = ColorAliases::from([
            ("b".to_string(), "slate".to_string()),
            ("a".to_string(), "violet".to_string()),
        ]);
        let out = generate_aliases(&colors(), &aliases).unwrap();
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "bA", "a", "aA"]);
    }

    #[test]
    fn alias_keeps_target_property_names() {
        let aliases = ColorAliases::from([("accent".to_string(), "violet".to_string())]);
        let out = generate_aliases(&colors(), &aliases).unwrap();
        assert_eq!(out["accent"].get(9), Some("var(--x-violet9)"));
        assert_eq!(out["accentA"].get(9), Some("var(--x-violetA9)"));
    }

    #[test]
    fn missing_target_is_an_error() {
        let aliases = ColorAliases::from([("danger".to_string(), "red".to_string())]);
        let err = generate_aliases(&colors(), &aliases).unwrap_err();
        match err {
            PresetError::UnknownAliasTarget { alias, target } => {
                assert_eq!(alias, "danger");
                assert_eq!(target, "red");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_aliases_no_tokens() {
        assert!(generate_aliases(&colors(), &ColorAliases::new()).unwrap().is_empty());
    }
}
