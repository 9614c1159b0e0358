//! Palette selection — the subset of the color table a preset works with.

use radix_colors::ColorScale;

use crate::error::{PresetError, Result};

/// An ordered selection of scales from the color table.
///
/// Order only affects output order; nothing downstream depends on it
/// semantically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    scales: Vec<&'static ColorScale>,
}

impl Palette {
    /// Select `names` from the color table, keeping the caller's order.
    ///
    /// A name listed twice is kept at its first position.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::UnknownColor`] for the first name that is not
    /// in the table.
    pub fn select<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scales: Vec<&'static ColorScale> = Vec::new();
        for name in names {
            let name = name.as_ref();
            let scale = radix_colors::scale(name).ok_or_else(|| PresetError::unknown_color(name))?;
            if !scales.iter().any(|s| s.name == scale.name) {
                scales.push(scale);
            }
        }
        Ok(Self { scales })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ColorScale> + '_ {
        self.scales.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scales.iter().map(|s| s.name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scales.iter().any(|s| s.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// Select `names` from the color table. Shorthand for [`Palette::select`].
///
/// # Errors
///
/// Returns [`PresetError::UnknownColor`] for a name not in the table.
pub fn new_palette<I, S>(names: I) -> Result<Palette>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Palette::select(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_caller_order() {
        let palette = Palette::select(["blue", "red", "gray"]).unwrap();
        let names: Vec<_> = palette.names().collect();
        assert_eq!(names, ["blue", "red", "gray"]);
    }

    #[test]
    fn duplicates_collapse_to_first() {
        let palette = Palette::select(["red", "blue", "red"]).unwrap();
        let names: Vec<_> = palette.names().collect();
        assert_eq!(names, ["red", "blue"]);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Palette::select(["red", "chartreuse", "nope"]).unwrap_err();
        match err {
            PresetError::UnknownColor { name } => assert_eq!(name, "chartreuse"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_selection() {
        let palette = Palette::select(Vec::<String>::new()).unwrap();
        assert!(palette.is_empty());
        assert!(!palette.contains("red"));
    }

    #[test]
    fn contains_only_selected() {
        let palette = new_palette(["teal"]).unwrap();
        assert!(palette.contains("teal"));
        assert!(!palette.contains("red"));
    }

    #[test]
    fn entries_are_table_references() {
        let palette = Palette::select(["amber"]).unwrap();
        let scale = palette.iter().next().unwrap();
        assert!(std::ptr::eq(scale, radix_colors::scale("amber").unwrap()));
    }
}
