// SPDX-License-Identifier: MIT
//
// Color scales and lookup over the static table.

use std::ops::RangeInclusive;

use crate::data::SCALES;

/// Number of steps in every scale.
pub const SHADE_COUNT: usize = 12;

/// Shade numbers as used in custom-property names (`--red1` .. `--red12`).
pub const SHADES: RangeInclusive<u8> = 1..=12;

/// One ramp of CSS color literals, indexed by `shade - 1`.
pub type Shades = [&'static str; SHADE_COUNT];

// ─── Mode ────────────────────────────────────────────────────────────────────

/// Which half of a scale to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];
}

// ─── ColorScale ──────────────────────────────────────────────────────────────

/// A named Radix color: 12 solid and 12 alpha steps, in light and dark.
///
/// Scales live in the static table and are only ever handed out by
/// reference; there is no way to build one at runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorScale {
    /// Scale name as used in class names and custom properties (`"red"`).
    pub name: &'static str,
    pub light: Shades,
    pub light_alpha: Shades,
    pub dark: Shades,
    pub dark_alpha: Shades,
}

impl ColorScale {
    /// The solid ramp for `mode`.
    #[must_use]
    pub const fn solid(&self, mode: Mode) -> &Shades {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// The alpha ramp for `mode`.
    #[must_use]
    pub const fn alpha(&self, mode: Mode) -> &Shades {
        match mode {
            Mode::Light => &self.light_alpha,
            Mode::Dark => &self.dark_alpha,
        }
    }

    /// Solid literal for a 1-based `shade`, or `None` outside 1..=12.
    #[must_use]
    pub fn shade(&self, mode: Mode, shade: u8) -> Option<&'static str> {
        let idx = usize::from(shade).checked_sub(1)?;
        self.solid(mode).get(idx).copied()
    }

    /// Alpha literal for a 1-based `shade`, or `None` outside 1..=12.
    #[must_use]
    pub fn alpha_shade(&self, mode: Mode, shade: u8) -> Option<&'static str> {
        let idx = usize::from(shade).checked_sub(1)?;
        self.alpha(mode).get(idx).copied()
    }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Every scale in the table, in table order.
#[must_use]
pub fn scales() -> &'static [ColorScale] {
    &SCALES
}

/// Look up a scale by name.
///
/// Returns `None` if the name is not in the table.
#[must_use]
pub fn scale(name: &str) -> Option<&'static ColorScale> {
    SCALES.iter().find(|s| s.name == name)
}

/// Whether `name` is a known scale.
#[must_use]
pub fn is_color(name: &str) -> bool {
    scale(name).is_some()
}

/// All scale names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(|s| s.name)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
