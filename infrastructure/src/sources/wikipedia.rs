//! Wikipedia source
//!
//! Fetches page summaries from the REST API:
//!
//! ```text
//! GET {rest_url}/page/summary/{Title}
//! ```
//!
//! A `disambiguation` summary is resolved by asking `opensearch` for ranked
//! candidates and fetching the first one that is not the disambiguation page
//! itself. Only one hop is made; a second disambiguation page counts as no
//! match. The extract is cut to the first few sentences.

use super::{SourceSetupError, classify, parse_endpoint};
use async_trait::async_trait;
use carcino_application::{DefinitionSource, SourceError};
use carcino_domain::core::string::first_sentences;
use carcino_domain::{SourceEntry, SourceName, Term};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Sentences kept from a summary extract by default
pub const DEFAULT_MAX_SENTENCES: usize = 4;

/// Number of candidates requested when resolving a disambiguation page
const OPENSEARCH_LIMIT: &str = "10";

#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    /// REST API root, e.g. `https://en.wikipedia.org/api/rest_v1`
    pub rest_url: String,
    /// Action API endpoint, e.g. `https://en.wikipedia.org/w/api.php`
    pub api_url: String,
    /// Sentences kept from the extract; `None` keeps all of it
    pub max_sentences: Option<usize>,
}

impl WikipediaConfig {
    /// Endpoints for the Wikipedia edition in `language` (e.g. `en`, `es`)
    pub fn for_language(language: &str) -> Self {
        Self {
            rest_url: format!("https://{}.wikipedia.org/api/rest_v1", language),
            api_url: format!("https://{}.wikipedia.org/w/api.php", language),
            max_sentences: Some(DEFAULT_MAX_SENTENCES),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self::for_language("en")
    }
}

#[derive(Debug, Deserialize)]
struct Summary {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: String,
}

impl Summary {
    fn is_disambiguation(&self) -> bool {
        self.kind == "disambiguation"
    }

    fn page_url(&self) -> Option<&str> {
        self.content_urls
            .as_ref()
            .and_then(|u| u.desktop.as_ref())
            .map(|d| d.page.as_str())
    }
}

/// Fallback definition source
pub struct WikipediaClient {
    client: reqwest::Client,
    rest_url: reqwest::Url,
    api_url: reqwest::Url,
    max_sentences: Option<usize>,
    /// Bound on a whole lookup, disambiguation hops included
    call_timeout: Duration,
}

impl WikipediaClient {
    /// Create a client sharing an existing `reqwest::Client` (and its timeout)
    pub fn with_client(
        client: reqwest::Client,
        config: WikipediaConfig,
    ) -> Result<Self, SourceSetupError> {
        Ok(Self {
            client,
            rest_url: parse_endpoint(&config.rest_url)?,
            api_url: parse_endpoint(&config.api_url)?,
            max_sentences: config.max_sentences,
            call_timeout: Duration::from_secs(carcino_application::config::DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    fn summary_url(&self, title: &str) -> reqwest::Url {
        let mut url = self.rest_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["page", "summary", title]);
        }
        url
    }

    /// `Ok(None)` when the page does not exist
    async fn summary(&self, title: &str) -> Result<Option<Summary>, SourceError> {
        let response = self
            .client
            .get(self.summary_url(title))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Http(status.as_u16()));
        }

        let summary = response.json::<Summary>().await.map_err(classify)?;
        Ok(Some(summary))
    }

    /// First `opensearch` candidate other than the disambiguation page
    async fn first_candidate(
        &self,
        term: &Term,
        disambiguation_title: &str,
    ) -> Result<Option<String>, SourceError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "opensearch"),
                ("search", term.as_str()),
                ("limit", OPENSEARCH_LIMIT),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(classify)?;
        let titles = body
            .get(1)
            .and_then(|v| v.as_array())
            .ok_or_else(|| SourceError::Parse("opensearch response has no titles".to_string()))?;

        Ok(titles
            .iter()
            .filter_map(|t| t.as_str())
            .find(|t| {
                !t.eq_ignore_ascii_case(disambiguation_title) && !t.contains("(disambiguation)")
            })
            .map(str::to_string))
    }

    /// Summary lookup plus at most one disambiguation hop
    async fn resolve(&self, term: &Term) -> Result<Option<SourceEntry>, SourceError> {
        let Some(summary) = self.summary(&page_title(term.as_str())).await? else {
            return Ok(None);
        };
        if !summary.is_disambiguation() {
            return Ok(self.to_entry(summary));
        }

        let Some(candidate) = self.first_candidate(term, &summary.title).await? else {
            debug!("No candidate for disambiguation page '{}'", summary.title);
            return Ok(None);
        };
        debug!("'{}' is ambiguous, using '{}'", term, candidate);

        match self.summary(&page_title(&candidate)).await? {
            Some(resolved) if !resolved.is_disambiguation() => Ok(self.to_entry(resolved)),
            _ => Ok(None),
        }
    }

    fn to_entry(&self, summary: Summary) -> Option<SourceEntry> {
        let extract = summary.extract.trim();
        if extract.is_empty() {
            return None;
        }
        let body = match self.max_sentences {
            Some(max) => first_sentences(extract, max),
            None => extract,
        };

        let mut entry = SourceEntry::new(body);
        if !summary.title.is_empty() {
            entry = entry.with_title(summary.title.as_str());
        }
        if let Some(url) = summary.page_url() {
            entry = entry.with_url(url);
        }
        Some(entry)
    }
}

#[async_trait]
impl DefinitionSource for WikipediaClient {
    fn name(&self) -> SourceName {
        SourceName::Wikipedia
    }

    async fn fetch(&self, term: &Term) -> Result<Option<SourceEntry>, SourceError> {
        tokio::time::timeout(self.call_timeout, self.resolve(term))
            .await
            .map_err(|_| SourceError::Timeout)?
    }
}

/// Page title form of a term: first letter upper-cased, spaces as underscores
fn page_title(text: &str) -> String {
    let mut chars = text.trim().chars();
    let mut title = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>(),
        None => return String::new(),
    };
    title.extend(chars);
    title.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::HttpOptions;
    use std::time::Instant;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, max_sentences: Option<usize>) -> WikipediaClient {
        let http = HttpOptions::default().with_timeout(Duration::from_millis(500));
        let config = WikipediaConfig {
            rest_url: format!("{}/api/rest_v1/", server.uri()),
            api_url: format!("{}/w/api.php", server.uri()),
            max_sentences,
        };
        WikipediaClient::with_client(http.build_client().unwrap(), config)
            .unwrap()
            .with_call_timeout(http.timeout)
    }

    fn standard(title: &str, extract: &str) -> serde_json::Value {
        serde_json::json!({
            "type": "standard",
            "title": title,
            "extract": extract,
            "content_urls": {
                "desktop": { "page": format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")) }
            }
        })
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("breast cancer"), "Breast_cancer");
        assert_eq!(page_title("élan vital"), "Élan_vital");
        assert_eq!(page_title("  "), "");
    }

    #[tokio::test]
    async fn test_lookup_standard_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Lung_cancer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(standard(
                "Lung cancer",
                "Lung cancer is a malignant tumor. It starts in the lung. Third. Fourth. Fifth.",
            )))
            .mount(&server)
            .await;

        let result = client_for(&server, Some(2))
            .lookup(&Term::new("lung cancer"))
            .await;

        assert!(result.is_found());
        assert_eq!(result.source(), Some(SourceName::Wikipedia));
        assert_eq!(
            result.raw_body(),
            "Lung cancer is a malignant tumor. It starts in the lung."
        );
        assert_eq!(result.title(), Some("Lung cancer"));
        assert_eq!(result.url(), Some("https://en.wikipedia.org/wiki/Lung_cancer"));
    }

    #[tokio::test]
    async fn test_lookup_missing_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(matches!(client.fetch(&Term::new("qwzx")).await, Ok(None)));
        assert!(!client.lookup(&Term::new("qwzx")).await.is_found());
    }

    #[tokio::test]
    async fn test_lookup_empty_extract_is_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(standard("Blank", "  ")))
            .mount(&server)
            .await;

        assert!(!client_for(&server, None).lookup(&Term::new("blank")).await.is_found());
    }

    #[tokio::test]
    async fn test_lookup_resolves_disambiguation_to_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Mole"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "disambiguation",
                "title": "Mole",
                "extract": "Mole may refer to:"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("action", "opensearch"))
            .and(query_param("search", "mole"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                "mole",
                ["Mole", "Mole (disambiguation)", "Mole (dermatology)", "Mole (animal)"],
                ["", "", "", ""],
                ["", "", "", ""]
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Mole_(dermatology)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(standard(
                "Mole (dermatology)",
                "A mole is a growth on the skin.",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, None).lookup(&Term::new("mole")).await;

        assert!(result.is_found());
        assert_eq!(result.raw_body(), "A mole is a growth on the skin.");
        assert_eq!(result.title(), Some("Mole (dermatology)"));
    }

    #[tokio::test]
    async fn test_lookup_disambiguation_without_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Mole"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "disambiguation",
                "title": "Mole",
                "extract": "Mole may refer to:"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!(["mole", ["Mole"], [""], [""]])),
            )
            .mount(&server)
            .await;

        assert!(!client_for(&server, None).lookup(&Term::new("mole")).await.is_found());
    }

    #[tokio::test]
    async fn test_lookup_malformed_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert!(matches!(
            client.fetch(&Term::new("glioma")).await,
            Err(SourceError::Parse(_))
        ));
        assert!(!client.lookup(&Term::new("glioma")).await.is_found());
    }

    #[tokio::test]
    async fn test_disambiguation_hops_share_one_timeout() {
        let server = MockServer::start().await;
        let delay = Duration::from_millis(400);
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Mole"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "type": "disambiguation",
                        "title": "Mole",
                        "extract": "Mole may refer to:"
                    }))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([
                        "mole",
                        ["Mole (dermatology)"],
                        [""],
                        [""]
                    ]))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/summary/Mole_(dermatology)"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(standard("Mole (dermatology)", "A mole is a growth on the skin."))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;

        // each response fits the 500ms budget on its own, the three together do not
        let client = client_for(&server, None);
        let started = Instant::now();
        let outcome = client.fetch(&Term::new("mole")).await;

        assert!(matches!(outcome, Err(SourceError::Timeout)));
        assert!(started.elapsed() < Duration::from_millis(900));
    }
}
