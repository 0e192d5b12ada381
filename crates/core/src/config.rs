use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ultratrace_protocol::TraceColor;

/// Which color a marker is drawn with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// The color the trace had when the annotation was committed.
    #[default]
    Captured,
    /// The trace's current color. Falls back to the captured color once the
    /// trace has been removed.
    Live,
}

/// What happens to a removed trace's annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Annotations stay in the log, still tagged with the removed id.
    #[default]
    Keep,
    /// Annotations tagged with the removed id are purged from the log.
    Cascade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Color given to a newly added trace.
    pub default_color: TraceColor,
    pub color_policy: ColorPolicy,
    pub orphan_policy: OrphanPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.default_color, TraceColor::Blue);
        assert_eq!(config.color_policy, ColorPolicy::Captured);
        assert_eq!(config.orphan_policy, OrphanPolicy::Keep);
    }

    #[test]
    fn empty_object_is_default() {
        let config = SessionConfig::from_json_str("{}");
        assert_eq!(config.ok(), Some(SessionConfig::default()));
    }

    #[test]
    fn partial_override() {
        let config = SessionConfig::from_json_str(
            r#"{ "default_color": "red", "color_policy": "live" }"#,
        );
        let Ok(config) = config else {
            panic!("config should parse");
        };
        assert_eq!(config.default_color, TraceColor::Red);
        assert_eq!(config.color_policy, ColorPolicy::Live);
        assert_eq!(config.orphan_policy, OrphanPolicy::Keep);
    }

    #[test]
    fn rejects_unknown_fields_and_values() {
        assert!(matches!(
            SessionConfig::from_json_str(r#"{ "colour": "red" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SessionConfig::from_json_str(r#"{ "orphan_policy": "reassign" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{ "default_color": "teal", "orphan_policy": "cascade" }"#)
            .expect("write config");

        let config = SessionConfig::load(file.path()).expect("config should load");
        assert_eq!(config.default_color, TraceColor::Teal);
        assert_eq!(config.color_policy, ColorPolicy::Captured);
        assert_eq!(config.orphan_policy, OrphanPolicy::Cascade);
    }

    #[test]
    fn load_reports_bad_json_in_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ not json").expect("write config");
        assert!(matches!(
            SessionConfig::load(file.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = SessionConfig::load("/nonexistent/ultratrace/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
