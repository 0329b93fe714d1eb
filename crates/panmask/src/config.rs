//! Sanitizer settings
//!
//! Settings are plain serde values. They can be built in code, parsed from
//! a YAML/TOML/JSON string, or read from a file whose format is picked by
//! extension. Per-call tweaks go through [`SettingsOverride`], which never
//! touches the instance settings.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};

/// Default replacement for hidden digits
pub const DEFAULT_REPLACEMENT_TOKEN: &str = "▇";

/// Default number of leading digits left visible
pub const DEFAULT_EXPOSE_FIRST: usize = 6;

/// Default number of trailing digits left visible
pub const DEFAULT_EXPOSE_LAST: usize = 4;

/// Inputs longer than this many characters are not scanned
pub const DEFAULT_MAX_INPUT_LEN: usize = 10_000;

/// Immutable settings for a [`Sanitizer`](crate::Sanitizer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Text substituted for every hidden digit
    pub replacement_token: String,

    /// Leading digits left visible
    pub expose_first: usize,

    /// Trailing digits left visible
    pub expose_last: usize,

    /// Require digit clusters to follow the issuer's printed layout
    pub use_groupings: bool,

    /// Skip numbers that validate as shipping tracking numbers
    pub exclude_tracking_numbers: bool,

    /// Reject numbers glued to letters unless a card keyword is adjacent
    pub parse_flanking: bool,

    /// Report each substitution instead of only the redacted text
    pub return_changes: bool,

    /// Inputs longer than this (in characters) are left alone
    pub max_input_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            replacement_token: DEFAULT_REPLACEMENT_TOKEN.to_string(),
            expose_first: DEFAULT_EXPOSE_FIRST,
            expose_last: DEFAULT_EXPOSE_LAST,
            use_groupings: false,
            exclude_tracking_numbers: false,
            parse_flanking: false,
            return_changes: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl Settings {
    /// Check values that serde accepts but the sanitizer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.max_input_len == 0 {
            return Err(Error::InvalidSettings(
                "max_input_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse settings from YAML
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from JSON
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    ///
    /// `.toml` and `.json` files are parsed accordingly; anything else is
    /// read as YAML.
    ///
    /// # Errors
    /// - `Error::Io` if the file can't be read
    /// - `Error::Yaml`/`Error::Toml`/`Error::Json` if it doesn't parse
    /// - `Error::InvalidSettings` if a value is out of range
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to read settings file {:?}: {}", path, e);
            Error::Io(e)
        })?;

        let settings = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
        .inspect_err(|e| error!("Failed to load settings from {:?}: {}", path, e))?;

        info!("Loaded sanitizer settings from {:?}", path);
        Ok(settings)
    }

    /// Apply per-call overrides
    ///
    /// Borrows `self` when there is nothing to override, or when the merged
    /// settings fail [`validate`](Self::validate); an invalid override is
    /// logged and dropped as a whole.
    pub fn merged(&self, overrides: &SettingsOverride) -> Cow<'_, Settings> {
        if overrides.is_empty() {
            return Cow::Borrowed(self);
        }

        let merged = self.apply(overrides);
        if let Err(e) = merged.validate() {
            warn!("Ignoring per-call settings override: {}", e);
            return Cow::Borrowed(self);
        }

        debug!("Applying per-call settings override");
        Cow::Owned(merged)
    }

    fn apply(&self, overrides: &SettingsOverride) -> Settings {
        Settings {
            replacement_token: overrides
                .replacement_token
                .clone()
                .unwrap_or_else(|| self.replacement_token.clone()),
            expose_first: overrides.expose_first.unwrap_or(self.expose_first),
            expose_last: overrides.expose_last.unwrap_or(self.expose_last),
            use_groupings: overrides.use_groupings.unwrap_or(self.use_groupings),
            exclude_tracking_numbers: overrides
                .exclude_tracking_numbers
                .unwrap_or(self.exclude_tracking_numbers),
            parse_flanking: overrides.parse_flanking.unwrap_or(self.parse_flanking),
            return_changes: overrides.return_changes.unwrap_or(self.return_changes),
            max_input_len: overrides.max_input_len.unwrap_or(self.max_input_len),
        }
    }
}

/// Per-call settings; `None` keeps the sanitizer's own value
///
/// Values are checked like [`Settings`]; see [`Settings::merged`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverride {
    pub replacement_token: Option<String>,
    pub expose_first: Option<usize>,
    pub expose_last: Option<usize>,
    pub use_groupings: Option<bool>,
    pub exclude_tracking_numbers: Option<bool>,
    pub parse_flanking: Option<bool>,
    pub return_changes: Option<bool>,
    pub max_input_len: Option<usize>,
}

impl SettingsOverride {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
