//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod corpus;
mod lookup;
mod output;
mod sources;

pub use corpus::FileCorpusConfig;
pub use lookup::{FileLookupConfig, FileSuggestConfig};
pub use output::FileOutputConfig;
pub use sources::{FileMedlinePlusConfig, FileWikipediaConfig};

use crate::sources::MedlineLanguage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a fallback value is used instead.
    Warning,
}

/// A detected problem in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key, e.g. `wikipedia.api_url`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Timeout, user agent, concurrency
    pub lookup: FileLookupConfig,
    /// Primary source
    pub medlineplus: FileMedlinePlusConfig,
    /// Fallback source
    pub wikipedia: FileWikipediaConfig,
    /// Autocomplete term list
    pub corpus: FileCorpusConfig,
    /// Autocomplete behavior
    pub suggest: FileSuggestConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Warnings describe values that are replaced by a fallback; errors
    /// describe values no source can be built from.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.lookup.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "lookup.timeout_secs",
                "must be positive, using the default timeout",
            ));
        }
        if self.lookup.max_in_flight == 0 {
            issues.push(ConfigIssue::warning(
                "lookup.max_in_flight",
                "must be at least 1, running one lookup at a time",
            ));
        }

        if MedlineLanguage::from_code(&self.medlineplus.language).is_none() {
            issues.push(ConfigIssue::warning(
                "medlineplus.language",
                format!(
                    "unknown value '{}', expected 'en' or 'es', falling back to 'en'",
                    self.medlineplus.language
                ),
            ));
        }
        check_endpoint(&mut issues, "medlineplus.base_url", &self.medlineplus.base_url);

        if !self.wikipedia.has_valid_language() {
            issues.push(ConfigIssue::warning(
                "wikipedia.language",
                format!(
                    "'{}' is not a Wikipedia edition code, falling back to 'en'",
                    self.wikipedia.language
                ),
            ));
        }
        if let Some(url) = &self.wikipedia.rest_url {
            check_endpoint(&mut issues, "wikipedia.rest_url", url);
        }
        if let Some(url) = &self.wikipedia.api_url {
            check_endpoint(&mut issues, "wikipedia.api_url", url);
        }

        if self.suggest.limit == 0 {
            issues.push(ConfigIssue::warning(
                "suggest.limit",
                "must be positive, using the default suggestion limit",
            ));
        }

        issues
    }

    /// True if any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

fn check_endpoint(issues: &mut Vec<ConfigIssue>, field: &str, url: &str) {
    if let Err(e) = crate::sources::parse_endpoint(url) {
        issues.push(ConfigIssue::error(field, e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcino_domain::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[lookup]
timeout_secs = 5
user_agent = "TermBot/1.0"
max_in_flight = 2

[medlineplus]
language = "es"

[wikipedia]
language = "de"
max_sentences = 2

[corpus]
path = "/usr/share/carcino/terms.txt"

[suggest]
limit = 3

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lookup.timeout_secs, 5);
        assert_eq!(config.lookup.user_agent.as_deref(), Some("TermBot/1.0"));
        assert_eq!(config.lookup.max_in_flight, 2);
        assert_eq!(config.medlineplus.language, "es");
        assert_eq!(config.wikipedia.language, "de");
        assert_eq!(config.wikipedia.max_sentences, 2);
        assert_eq!(
            config.corpus.path,
            Some(PathBuf::from("/usr/share/carcino/terms.txt"))
        );
        assert_eq!(config.suggest.limit, 3);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[lookup]
timeout_secs = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lookup.timeout_secs, 30);
        // Defaults should apply
        assert_eq!(config.lookup.max_in_flight, FileLookupConfig::default().max_in_flight);
        assert_eq!(config.medlineplus.language, "en");
        assert!(config.corpus.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_fallbacks_as_warnings() {
        let mut config = FileConfig::default();
        config.lookup.timeout_secs = 0;
        config.medlineplus.language = "fr".to_string();
        config.suggest.limit = 0;

        let issues = config.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["lookup.timeout_secs", "medlineplus.language", "suggest.limit"]
        );
        assert!(!FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = FileConfig::default();
        config.wikipedia.api_url = Some("not a url".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "wikipedia.api_url");
        assert!(issues[0].is_error());
        assert!(FileConfig::has_errors(&issues));
    }
}
