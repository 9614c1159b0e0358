// SPDX-License-Identifier: MIT
//
// unocss-preset-radix — Radix Colors for utility-class stylesheets.
//
// This is the facade hosts depend on. It wires together:
//
//   radix-colors → the static scale table (light/dark, solid/alpha)
//   radix-preset → palette selection, CSS emission, tokens, aliases, hue rule
//
// A host builds a preset once from its configuration and then drives it:
//
//   options → preset_radix → Preset
//     preflights[0].get_css()  → palette custom properties (light + dark)
//     extend_theme(&mut theme) → theme.colors = tokens + aliases + hue
//     rules[0].generate(class) → `.hue-<name> { ... }` per requested class

pub use radix_colors as colors;
pub use radix_preset::*;
