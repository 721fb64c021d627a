//! Configuration options for a filtering run.

use serde::{Deserialize, Serialize};

/// Default storage prefix watched for new raw files.
pub const DEFAULT_INPUT_PREFIX: &str = "raw";
/// Default storage prefix that receives processed files.
pub const DEFAULT_OUTPUT_PREFIX: &str = "processed";
/// Default retention window for terminal-status records, in days.
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// How the output key is derived from the input key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputNaming {
    /// `<output_prefix>/<tag><file name>`.
    Tagged { tag: String },
    /// Input key with its leading input-prefix segments swapped for the output prefix.
    Mirrored,
}

/// Options controlling one invocation.
///
/// Prefixes are stored without leading or trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiftOptions {
    /// Only keys under this prefix are processed.
    pub input_prefix: String,
    /// Root for written output keys.
    pub output_prefix: String,
    /// Age after which pending/cancelled records are dropped.
    pub retention_days: u32,
    /// Filename tag; when set, selects [`OutputNaming::Tagged`].
    pub output_tag: Option<String>,
}

impl Default for SiftOptions {
    fn default() -> Self {
        Self {
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
            output_tag: None,
        }
    }
}

impl SiftOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_input_prefix(mut self, prefix: &str) -> Self {
        self.input_prefix = normalize_prefix(prefix);
        self
    }

    #[must_use]
    pub fn with_output_prefix(mut self, prefix: &str) -> Self {
        self.output_prefix = normalize_prefix(prefix);
        self
    }

    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Set the output filename tag. An empty tag means "no tag".
    #[must_use]
    pub fn with_output_tag(mut self, tag: Option<String>) -> Self {
        self.output_tag = tag.filter(|value| !value.is_empty());
        self
    }

    /// The naming scheme active for this configuration.
    pub fn naming(&self) -> OutputNaming {
        match &self.output_tag {
            Some(tag) => OutputNaming::Tagged { tag: tag.clone() },
            None => OutputNaming::Mirrored,
        }
    }
}

/// Strip leading and trailing `/` from a storage prefix.
pub fn normalize_prefix(raw: &str) -> String {
    raw.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_defaults() {
        let options = SiftOptions::default();
        assert_eq!(options.input_prefix, "raw");
        assert_eq!(options.output_prefix, "processed");
        assert_eq!(options.retention_days, 30);
        assert_eq!(options.naming(), OutputNaming::Mirrored);
    }

    #[test]
    fn prefixes_are_normalized() {
        let options = SiftOptions::new()
            .with_input_prefix("/incoming/raw/")
            .with_output_prefix("out/");
        assert_eq!(options.input_prefix, "incoming/raw");
        assert_eq!(options.output_prefix, "out");
    }

    #[test]
    fn empty_tag_selects_mirrored_naming() {
        let options = SiftOptions::new().with_output_tag(Some(String::new()));
        assert_eq!(options.naming(), OutputNaming::Mirrored);

        let options = SiftOptions::new().with_output_tag(Some("filtered_".into()));
        assert_eq!(
            options.naming(),
            OutputNaming::Tagged {
                tag: "filtered_".into()
            }
        );
    }
}
