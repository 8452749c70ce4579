//! MedlinePlus Connect source
//!
//! Queries the NLM health-topics search service:
//!
//! ```text
//! GET {base_url}?db=healthTopics&term=<term>&rettype=brief
//! ```
//!
//! The response is an `nlmSearchResult` XML document. Each `document` carries
//! `content` elements keyed by `name`; `FullSummary` holds the definition as
//! escaped HTML and `title` the topic name. The first document with a
//! non-empty summary wins.

use super::{SourceSetupError, classify, parse_endpoint};
use async_trait::async_trait;
use carcino_application::{DefinitionSource, SourceError};
use carcino_domain::{SourceEntry, SourceName, Term};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Public MedlinePlus Connect endpoint
pub const MEDLINEPLUS_CONNECT_URL: &str = "https://wsearch.nlm.nih.gov/ws/query";

/// Language of the health-topics database to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedlineLanguage {
    #[default]
    English,
    Spanish,
}

impl MedlineLanguage {
    /// Parse an ISO 639-1 code (`en`, `es`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }

    /// The `db` query parameter for this language
    pub fn database(&self) -> &'static str {
        match self {
            Self::English => "healthTopics",
            Self::Spanish => "healthTopicsSpanish",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MedlinePlusConfig {
    pub base_url: String,
    pub language: MedlineLanguage,
}

impl Default for MedlinePlusConfig {
    fn default() -> Self {
        Self {
            base_url: MEDLINEPLUS_CONNECT_URL.to_string(),
            language: MedlineLanguage::default(),
        }
    }
}

/// Primary definition source
pub struct MedlinePlusClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    language: MedlineLanguage,
}

impl MedlinePlusClient {
    /// Create a client sharing an existing `reqwest::Client` (and its timeout)
    pub fn with_client(
        client: reqwest::Client,
        config: MedlinePlusConfig,
    ) -> Result<Self, SourceSetupError> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(&config.base_url)?,
            language: config.language,
        })
    }
}

#[async_trait]
impl DefinitionSource for MedlinePlusClient {
    fn name(&self) -> SourceName {
        SourceName::MedlinePlus
    }

    async fn fetch(&self, term: &Term) -> Result<Option<SourceEntry>, SourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("db", self.language.database()),
                ("term", term.as_str()),
                ("rettype", "brief"),
            ])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        parse_search_result(&body)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Summary,
}

#[derive(Default)]
struct Document {
    url: Option<String>,
    title: String,
    summary: String,
}

impl Document {
    fn push(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
        };
        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(text);
    }

    fn into_entry(self) -> SourceEntry {
        let mut entry = SourceEntry::new(self.summary.trim());
        if !self.title.trim().is_empty() {
            entry = entry.with_title(self.title.trim());
        }
        if let Some(url) = self.url {
            entry = entry.with_url(url);
        }
        entry
    }
}

/// Extract the first document with a `FullSummary` from an `nlmSearchResult`
fn parse_search_result(xml: &str) -> Result<Option<SourceEntry>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut saw_root = false;
    let mut document: Option<Document> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"nlmSearchResult" => saw_root = true,
                b"document" => {
                    document = Some(Document {
                        url: attribute(&e, "url")?,
                        ..Default::default()
                    });
                }
                b"content" if document.is_some() => {
                    field = match attribute(&e, "name")?.as_deref() {
                        Some("title") => Some(Field::Title),
                        Some("FullSummary") => Some(Field::Summary),
                        _ => None,
                    };
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"nlmSearchResult" {
                    saw_root = true;
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(doc), Some(f)) = (document.as_mut(), field) {
                    let text = t
                        .unescape()
                        .map_err(|e| SourceError::Parse(e.to_string()))?;
                    doc.push(f, &text);
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(doc), Some(f)) = (document.as_mut(), field) {
                    doc.push(f, &String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"content" => field = None,
                b"document" => {
                    if let Some(doc) = document.take()
                        && !doc.summary.trim().is_empty()
                    {
                        return Ok(Some(doc.into_entry()));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SourceError::Parse(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(SourceError::Parse(
            "response is not an nlmSearchResult document".to_string(),
        ));
    }
    Ok(None)
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, SourceError> {
    match e.try_get_attribute(name) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|v| Some(v.into_owned()))
            .map_err(|err| SourceError::Parse(err.to_string())),
        Ok(None) => Ok(None),
        Err(err) => Err(SourceError::Parse(err.to_string())),
    }
}
