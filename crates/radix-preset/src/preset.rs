//! Preset assembly — options in, host-facing preset out.
//!
//! Everything that depends only on options is computed once here. The two
//! host callbacks, [`Rule::generate`] and [`Preflight::get_css`], run per
//! request and recompute their output each time.

use indexmap::IndexMap;
use regex::Regex;

use crate::alias::generate_aliases;
use crate::css::gen_css;
use crate::error::Result;
use crate::hue::{HueRule, HUE_RULE_PATTERN};
use crate::options::PresetRadixOptions;
use crate::palette::Palette;
use crate::theme::{extend_with_host, layer_colors, Theme, ThemeColors};
use crate::tokens::{generate_colors, generate_hues};

/// Name the preset registers under.
pub const PRESET_NAME: &str = "unocss-preset-radix";

/// Layer holding the palette preflight.
pub const LAYER: &str = "radix";

/// Order of [`LAYER`] among the host's layers; negative sorts before utilities.
pub const LAYER_ORDER: i32 = -1;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A dynamic class rule: the host tests `pattern`, then asks for CSS.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    matcher: HueRule,
}

impl Rule {
    /// CSS for `class`. Empty when the class is not a known hue.
    #[must_use]
    pub fn generate(&self, class: &str) -> String {
        self.matcher.generate(class).unwrap_or_default()
    }

    #[must_use]
    pub const fn matcher(&self) -> &HueRule {
        &self.matcher
    }
}

// ---------------------------------------------------------------------------
// Preflight
// ---------------------------------------------------------------------------

/// Stylesheet emitted ahead of utilities: the palette's custom properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    pub layer: &'static str,
    palette: Palette,
    dark_selector: String,
    light_selector: String,
    prefix: String,
}

impl Preflight {
    #[must_use]
    pub fn get_css(&self) -> String {
        tracing::debug!(
            target: "radix.preset",
            layer = self.layer,
            colors = self.palette.len(),
            "generating palette preflight"
        );
        gen_css(&self.palette, &self.dark_selector, &self.light_selector, &self.prefix)
    }
}

// ---------------------------------------------------------------------------
// Preset
// ---------------------------------------------------------------------------

/// The assembled preset handed to the host.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    /// Layer name → sort order.
    pub layers: IndexMap<&'static str, i32>,
    pub rules: Vec<Rule>,
    pub preflights: Vec<Preflight>,
    colors: ThemeColors,
    extend: bool,
}

impl Preset {
    /// Install the generated colors on the host theme.
    ///
    /// Without `extend`, the host's colors are replaced. With it, host colors
    /// whose names the preset does not generate are kept after the generated
    /// ones; on a name collision the generated color wins.
    pub fn extend_theme(&self, theme: &mut Theme) {
        let host = std::mem::take(&mut theme.colors);
        let mut colors = self.colors.clone();

        let appended = if self.extend {
            extend_with_host(&mut colors, host)
        } else {
            0
        };

        tracing::debug!(
            target: "radix.preset",
            generated = self.colors.len(),
            appended,
            extend = self.extend,
            "theme colors installed"
        );
        theme.colors = colors;
    }

    /// The generated color table, before any host merge.
    #[must_use]
    pub const fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// CSS for `class` from the first rule whose pattern matches it.
    #[must_use]
    pub fn generate_rule(&self, class: &str) -> String {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(class))
            .map(|rule| rule.generate(class))
            .unwrap_or_default()
    }
}

/// Build the preset from `options`.
///
/// # Errors
///
/// Returns [`PresetError::UnknownColor`](crate::PresetError::UnknownColor) if a
/// palette entry is not a known color, and
/// [`PresetError::UnknownAliasTarget`](crate::PresetError::UnknownAliasTarget)
/// if an alias targets a color outside the palette.
pub fn preset_radix(options: PresetRadixOptions) -> Result<Preset> {
    let PresetRadixOptions {
        palette: selected,
        prefix,
        dark_selector,
        light_selector,
        aliases: selected_aliases,
        extend,
    } = options;

    let palette = Palette::select(&selected)?;
    let colors = generate_colors(&palette, &prefix);
    let hues = generate_hues(&prefix);
    let aliases = generate_aliases(&colors, &selected_aliases)?;

    tracing::debug!(
        target: "radix.preset",
        colors = palette.len(),
        aliases = selected_aliases.len(),
        prefix = %prefix,
        extend,
        "radix preset constructed"
    );

    let rule = Rule {
        pattern: Regex::new(HUE_RULE_PATTERN)?,
        matcher: HueRule::new(prefix.clone(), &palette, selected_aliases),
    };

    Ok(Preset {
        name: PRESET_NAME,
        layers: IndexMap::from([(LAYER, LAYER_ORDER)]),
        rules: vec![rule],
        colors: layer_colors([&colors, &aliases, &hues]),
        preflights: vec![Preflight {
            layer: LAYER,
            palette,
            dark_selector,
            light_selector,
            prefix,
        }],
        extend,
    })
}
