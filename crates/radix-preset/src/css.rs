//! CSS emission — the palette as custom-property declarations.
//!
//! Two rule blocks are produced, one per mode. Both declare the same
//! property names; the dark block's values win wherever its selector
//! applies:
//!
//! ```text
//! :root, .light-theme { --p-red1: #fffcfc; ... --p-redA12: #55000de8; ... }
//! .dark-theme { --p-red1: #191111; ... --p-redA12: #ffd1d9; ... }
//! ```

use radix_colors::{Mode, SHADES};

use crate::palette::Palette;

/// Collapse CSS text onto one line.
///
/// Newlines go, every whitespace run becomes a single space, and the ends
/// are trimmed. Runs are collapsed rather than removed so descendant
/// selectors (`.dark-theme .card`) and space-separated values survive.
#[must_use]
pub fn minify(css: &str) -> String {
    css.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Serialize `palette` into a light and a dark block of custom properties.
///
/// Selectors are inserted as given; the caller is trusted to pass valid CSS.
#[must_use]
pub fn gen_css(palette: &Palette, dark_selector: &str, light_selector: &str, prefix: &str) -> String {
    let mut css = String::new();
    write_block(&mut css, palette, Mode::Light, light_selector, prefix);
    write_block(&mut css, palette, Mode::Dark, dark_selector, prefix);
    minify(&css)
}

fn write_block(css: &mut String, palette: &Palette, mode: Mode, selector: &str, prefix: &str) {
    css.push_str(&format!("{selector} {{\n"));
    for scale in palette.iter() {
        let name = scale.name;
        for (shade, value) in SHADES.zip(scale.solid(mode)) {
            css.push_str(&format!("  {prefix}{name}{shade}: {value};\n"));
        }
        for (shade, value) in SHADES.zip(scale.alpha(mode)) {
            css.push_str(&format!("  {prefix}{name}A{shade}: {value};\n"));
        }
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn no_whitespace_runs(s: &str) -> bool {
        !s.contains('\n')
            && !s
                .chars()
                .zip(s.chars().skip(1))
                .any(|(a, b)| a.is_whitespace() && b.is_whitespace())
    }

    #[test]
    fn minify_collapses_and_trims() {
        assert_eq!(minify("  .a {\n\t--x:  1;\n}\n"), ".a { --x: 1; }");
        assert_eq!(minify(".dark-theme   .card"), ".dark-theme .card");
        assert_eq!(minify(""), "");
        assert_eq!(minify(" \n\t "), "");
    }

    #[test]
    fn light_and_dark_blocks() {
        let palette = Palette::select(["red"]).unwrap();
        let css = gen_css(&palette, ".dark-theme", ":root, .light-theme", "--x-");

        assert!(css.starts_with(":root, .light-theme { --x-red1: #fffcfc;"));
        let (light, dark) = css.split_once("} .dark-theme {").unwrap();
        assert!(dark.ends_with('}'));

        assert!(light.contains("--x-red1: #fffcfc;"));
        assert!(light.contains("--x-redA12: #55000de8;"));
        assert!(dark.contains("--x-red1: #191111;"));
        assert!(dark.contains("--x-redA12: #ffd1d9;"));
    }

    #[test]
    fn every_shade_declared_in_both_blocks() {
        let palette = Palette::select(["red", "blue"]).unwrap();
        let css = gen_css(&palette, ".dark-theme", ":root, .light-theme", "--x-");
        let (light, dark) = css.split_once(".dark-theme").unwrap();

        for block in [light, dark] {
            for name in ["red", "blue"] {
                for shade in 1..=12 {
                    assert!(block.contains(&format!("--x-{name}{shade}:")), "{name}{shade}");
                    assert!(block.contains(&format!("--x-{name}A{shade}:")), "{name}A{shade}");
                }
            }
            assert_eq!(block.matches(": #").count(), 2 * 24);
        }
    }

    #[test]
    fn palette_order_is_output_order() {
        let palette = Palette::select(["blue", "red"]).unwrap();
        let css = gen_css(&palette, ".d", ".l", "--p-");
        let blue = css.find("--p-blue1:").unwrap();
        let red = css.find("--p-red1:").unwrap();
        assert!(blue < red);
    }

    #[test]
    fn solids_precede_alphas_per_color() {
        let palette = Palette::select(["red", "blue"]).unwrap();
        let css = gen_css(&palette, ".d", ".l", "--p-");
        let red_a12 = css.find("--p-redA12:").unwrap();
        let blue1 = css.find("--p-blue1:").unwrap();
        assert!(css.find("--p-red12:").unwrap() < css.find("--p-redA1:").unwrap());
        assert!(red_a12 < blue1);
    }

    #[test]
    fn empty_palette_emits_empty_blocks() {
        let css = gen_css(&Palette::default(), ".dark-theme", ":root", "--p-");
        assert_eq!(css, ":root { } .dark-theme { }");
    }

    #[test]
    fn selectors_are_not_escaped() {
        let palette = Palette::select(["gray"]).unwrap();
        let css = gen_css(&palette, "[data-theme=\"dark\"] .app", "html", "--p-");
        assert!(css.contains("} [data-theme=\"dark\"] .app {"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn output_is_single_line(
            dark in "[.:a-z \t\n-]{0,16}",
            light in "[.:a-z, \t\n-]{0,16}",
            prefix in "--[a-z -]{0,8}",
        ) {
            let palette = Palette::select(["red", "slate"]).unwrap();
            let css = gen_css(&palette, &dark, &light, &prefix);
            prop_assert!(no_whitespace_runs(&css));
            prop_assert_eq!(css.trim(), css.as_str());
        }

        #[test]
        fn minify_is_idempotent(input in "[ \t\na-z{};:-]{0,64}") {
            let once = minify(&input);
            prop_assert!(no_whitespace_runs(&once));
            prop_assert_eq!(minify(&once), once);
        }
    }
}
