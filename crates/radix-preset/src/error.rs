//! Configuration errors.
//!
//! Construction is the only fallible step. Once a [`Preset`](crate::Preset)
//! exists, every lookup it performs is total: unknown hue classes simply
//! produce no CSS.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("unknown color in palette: {name}")]
    UnknownColor { name: String },

    #[error("alias `{alias}` targets `{target}`, which is not in the selected palette")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("invalid preset options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl PresetError {
    pub(crate) fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor { name: name.into() }
    }

    pub(crate) fn unknown_alias_target(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownAliasTarget {
            alias: alias.into(),
            target: target.into(),
        }
    }
}
