//! Preset options — what the host passes at construction time.
//!
//! Options can be built in Rust with [`PresetRadixOptions::new`] and the
//! `with_*` setters, or read from the host's JSON configuration object with
//! [`PresetRadixOptions::from_json`]. Keys are camelCase to match that object.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default custom-property prefix.
pub const DEFAULT_PREFIX: &str = "--un-preset-radix-";
/// Default selector for the dark half of the palette.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark-theme";
/// Default selector for the light half of the palette.
pub const DEFAULT_LIGHT_SELECTOR: &str = ":root, .light-theme";

/// Alias name → target color name.
pub type ColorAliases = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresetRadixOptions {
    /// Colors to include, in output order.
    pub palette: Vec<String>,

    /// Prefix of every generated custom property, dashes included.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_dark_selector")]
    pub dark_selector: String,

    #[serde(default = "default_light_selector")]
    pub light_selector: String,

    #[serde(default)]
    pub aliases: ColorAliases,

    /// Keep the host's existing theme colors instead of replacing them.
    #[serde(default)]
    pub extend: bool,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_dark_selector() -> String {
    DEFAULT_DARK_SELECTOR.to_string()
}

fn default_light_selector() -> String {
    DEFAULT_LIGHT_SELECTOR.to_string()
}

impl PresetRadixOptions {
    /// Options for `palette` with every other field at its default.
    #[must_use]
    pub fn new<I, S>(palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            palette: palette.into_iter().map(Into::into).collect(),
            prefix: default_prefix(),
            dark_selector: default_dark_selector(),
            light_selector: default_light_selector(),
            aliases: ColorAliases::new(),
            extend: false,
        }
    }

    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::InvalidOptions`](crate::PresetError::InvalidOptions)
    /// if the JSON is malformed, `palette` is missing, or an unknown key is present.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_dark_selector(mut self, selector: impl Into<String>) -> Self {
        self.dark_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_light_selector(mut self, selector: impl Into<String>) -> Self {
        self.light_selector = selector.into();
        self
    }

    /// Add one alias. A later alias with the same name replaces the earlier one.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    #[must_use]
    pub const fn with_extend(mut self, extend: bool) -> Self {
        self.extend = extend;
        self
    }
}
