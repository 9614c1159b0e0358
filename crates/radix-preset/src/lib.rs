//! # radix-preset — Radix Colors as CSS variables and theme tokens
//!
//! Turns a selection of Radix color scales into everything a utility-class
//! styling host needs: a preflight stylesheet declaring one custom property
//! per shade, a theme color table of `var(...)` references, and a dynamic
//! `hue-<color>` rule that rebinds a generic hue ramp per element.
//!
//! # Architecture
//!
//! ```text
//! PresetRadixOptions (palette, prefix, selectors, aliases, extend)
//!     │
//!     ▼
//! palette.rs: select scales from the static table (radix-colors)
//!     │
//!     ├──▶ css.rs:    light + dark custom-property blocks (preflight)
//!     │
//!     ▼
//! tokens.rs:  {color}/{color}A and hue/hueA reference groups
//!     │
//!     ▼
//! alias.rs:   re-key groups under alias names
//!     │
//!     ▼
//! preset.rs:  Preset { layers, rules (hue.rs), preflights, extend_theme }
//! ```
//!
//! # Example
//!
//! ```
//! use radix_preset::{preset_radix, PresetRadixOptions, Theme};
//!
//! let preset = preset_radix(
//!     PresetRadixOptions::new(["violet", "slate"]).with_alias("primary", "violet"),
//! )
//! .unwrap();
//!
//! let mut theme = Theme::default();
//! preset.extend_theme(&mut theme);
//! assert!(theme.colors.contains_key("primaryA"));
//!
//! let css = preset.generate_rule("hue-primary");
//! assert!(css.contains("var(--un-preset-radix-violet9)"));
//! ```

pub mod alias;
pub mod css;
pub mod error;
pub mod hue;
pub mod options;
pub mod palette;
pub mod preset;
pub mod theme;
pub mod tokens;

pub use alias::generate_aliases;
pub use css::{gen_css, minify};
pub use error::{PresetError, Result};
pub use hue::{parse_hue_class, HueRule, HUE_RULE_PATTERN};
pub use options::{ColorAliases, PresetRadixOptions};
pub use palette::{new_palette, Palette};
pub use preset::{preset_radix, Preflight, Preset, Rule};
pub use theme::{Theme, ThemeColor, ThemeColors};
pub use tokens::{generate_colors, generate_hues, ShadeScale, TokenMap};
