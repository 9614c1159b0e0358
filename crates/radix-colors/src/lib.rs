// SPDX-License-Identifier: MIT
//
// radix-colors — the Radix Colors scale table.
//
// Every scale is a 12-step ramp, carried four times: solid and alpha, for
// light and dark mode. Steps 1-2 are app backgrounds, 3-5 component
// backgrounds, 6-8 borders, 9-10 solid fills, 11-12 text. The alpha ramps
// composite to the solid ones over the mode's page background.
//
// The table is a plain `static` array. It is compiled in, never mutated,
// and needs no initialization, so lookups are free to hand out
// `&'static` references.

pub mod data;
pub mod literal;
pub mod scale;

pub use literal::{parse_hex, Rgba};
pub use scale::{is_color, names, scale, scales, ColorScale, Mode, Shades, SHADES, SHADE_COUNT};
