//! Console output formatter for lookup results

use carcino_domain::{DefinitionResult, SuggestionSet};
use colored::Colorize;
use serde_json::json;

/// Shown when the user submits an empty or whitespace-only term
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a term to search.";

/// Formats definitions and suggestions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a resolved definition with its source attribution.
    ///
    /// A miss gets a neutral message that names the term.
    pub fn format(result: &DefinitionResult) -> String {
        let Some(source) = result.source().filter(|_| result.is_found()) else {
            return Self::not_found(result);
        };

        let mut output = String::new();

        let heading = result.title().unwrap_or(result.term().as_str());
        output.push_str(&format!("{}\n", heading.bold()));
        output.push_str(&format!(
            "{} {}\n\n",
            "Source:".cyan().bold(),
            source.attribution()
        ));
        output.push_str(result.cleaned_body());
        output.push('\n');

        if let Some(url) = result.url() {
            output.push_str(&format!("\n{} {}\n", "More:".cyan(), url.dimmed()));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DefinitionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format autocomplete suggestions, one per line
    pub fn format_suggestions(partial: &str, suggestions: &SuggestionSet) -> String {
        if suggestions.is_empty() {
            return format!("No suggestions for '{}'.\n", partial.trim());
        }

        let mut output = String::new();
        for term in suggestions {
            output.push_str(&format!("  {} {}\n", "*".cyan(), term));
        }
        output
    }

    /// Format suggestions as JSON: `{"partial": ..., "suggestions": [...]}`
    pub fn format_suggestions_json(partial: &str, suggestions: &SuggestionSet) -> String {
        let value = json!({
            "partial": partial.trim(),
            "suggestions": suggestions,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn not_found(result: &DefinitionResult) -> String {
        format!("No definition found for '{}'.\n", result.term())
    }

    /// Print a header line
    pub fn header(title: &str) -> String {
        let line = "═".repeat(50);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcino_domain::{SourceEntry, SourceName, Term};

    fn found() -> DefinitionResult {
        DefinitionResult::found(
            Term::new("metastasis"),
            SourceName::MedlinePlus,
            SourceEntry::new("<p>The spread of cancer.</p>")
                .with_title("Metastatic Cancer")
                .with_url("https://medlineplus.gov/metastaticcancer.html"),
        )
        .clean_with(|s| s.replace("<p>", "").replace("</p>", ""))
    }

    #[test]
    fn test_format_found_shows_attribution_and_body() {
        let output = ConsoleFormatter::format(&found());
        assert!(output.contains("Metastatic Cancer"));
        assert!(output.contains("Source:"));
        assert!(output.contains("MedlinePlus (U.S. National Library of Medicine)"));
        assert!(output.contains("The spread of cancer."));
        assert!(output.contains("https://medlineplus.gov/metastaticcancer.html"));
        assert!(!output.contains("<p>"));
    }

    #[test]
    fn test_format_not_found_is_neutral() {
        let result = DefinitionResult::not_found(Term::new("xyzzy-not-a-term"), None);
        assert_eq!(
            ConsoleFormatter::format(&result),
            "No definition found for 'xyzzy-not-a-term'.\n"
        );
    }

    #[test]
    fn test_format_json_contains_source() {
        let json = ConsoleFormatter::format_json(&found());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["term"], "metastasis");
        assert_eq!(value["found"], true);
    }

    #[test]
    fn test_format_suggestions() {
        let set = SuggestionSet::new(vec![Term::new("cancer"), Term::new("cancer staging")]);
        let output = ConsoleFormatter::format_suggestions("canc", &set);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("cancer staging"));

        let none = ConsoleFormatter::format_suggestions(" zz ", &SuggestionSet::empty());
        assert_eq!(none, "No suggestions for 'zz'.\n");
    }

    #[test]
    fn test_format_suggestions_json() {
        let set = SuggestionSet::new(vec![Term::new("cancer")]);
        let json = ConsoleFormatter::format_suggestions_json("can", &set);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["partial"], "can");
        assert_eq!(value["suggestions"][0], "cancer");
    }
}
