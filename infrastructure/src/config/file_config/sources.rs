//! Source configuration from TOML (`[medlineplus]` and `[wikipedia]` sections)

use crate::sources::{
    DEFAULT_MAX_SENTENCES, MEDLINEPLUS_CONNECT_URL, MedlineLanguage, MedlinePlusConfig,
    WikipediaConfig,
};
use serde::{Deserialize, Serialize};

/// Raw `[medlineplus]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMedlinePlusConfig {
    /// MedlinePlus Connect endpoint
    pub base_url: String,
    /// `en` or `es`
    pub language: String,
}

impl Default for FileMedlinePlusConfig {
    fn default() -> Self {
        Self {
            base_url: MEDLINEPLUS_CONNECT_URL.to_string(),
            language: "en".to_string(),
        }
    }
}

impl FileMedlinePlusConfig {
    /// Unknown languages fall back to English
    pub fn to_client_config(&self) -> MedlinePlusConfig {
        MedlinePlusConfig {
            base_url: self.base_url.clone(),
            language: MedlineLanguage::from_code(&self.language).unwrap_or_default(),
        }
    }
}

/// Raw `[wikipedia]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikipediaConfig {
    /// Wikipedia edition, e.g. `en`
    pub language: String,
    /// Override for the REST API root
    pub rest_url: Option<String>,
    /// Override for the action API endpoint
    pub api_url: Option<String>,
    /// Sentences kept from a summary; 0 keeps the whole extract
    pub max_sentences: usize,
}

impl Default for FileWikipediaConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            rest_url: None,
            api_url: None,
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl FileWikipediaConfig {
    /// True for a plausible edition code (`en`, `es`, `simple`, `zh-yue`)
    pub fn has_valid_language(&self) -> bool {
        !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-')
    }

    /// Invalid languages fall back to English
    pub fn to_client_config(&self) -> WikipediaConfig {
        let language = if self.has_valid_language() {
            self.language.as_str()
        } else {
            "en"
        };
        let mut config = WikipediaConfig::for_language(language);
        if let Some(url) = &self.rest_url {
            config.rest_url = url.clone();
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        config.max_sentences = match self.max_sentences {
            0 => None,
            n => Some(n),
        };
        config
    }
}
