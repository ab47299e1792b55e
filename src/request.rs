//! Generation request configuration and session credentials.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds for the article word-count slider.
pub const WORD_COUNT_MIN: u32 = 300;
pub const WORD_COUNT_MAX: u32 = 1000;

/// Bounds for the source-count slider.
pub const SOURCE_COUNT_MIN: u32 = 2;
pub const SOURCE_COUNT_MAX: u32 = 5;

/// Which model drives the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelChoice {
    /// Faster, cheaper generation
    Fast,
    /// Slower, higher quality generation
    HighQuality,
}

impl ModelChoice {
    /// Provider model identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ModelChoice::Fast => "gpt-3.5-turbo",
            ModelChoice::HighQuality => "gpt-4o",
        }
    }
}

/// Editorial style of the final article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleStyle {
    Informative,
    Persuasive,
    Narrative,
    Analytical,
    Conversational,
}

impl ArticleStyle {
    /// All selectable styles, in UI order.
    pub const ALL: [ArticleStyle; 5] = [
        ArticleStyle::Informative,
        ArticleStyle::Persuasive,
        ArticleStyle::Narrative,
        ArticleStyle::Analytical,
        ArticleStyle::Conversational,
    ];
}

impl fmt::Display for ArticleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArticleStyle::Informative => "Informative",
            ArticleStyle::Persuasive => "Persuasive",
            ArticleStyle::Narrative => "Narrative",
            ArticleStyle::Analytical => "Analytical",
            ArticleStyle::Conversational => "Conversational",
        };
        f.write_str(label)
    }
}

/// One article generation request.
///
/// All fields are transient; nothing here outlives the request except the
/// stage texts retained by [`crate::Session`] on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub model: ModelChoice,
    pub target_word_count: u32,
    pub source_count: u32,
    pub style: ArticleStyle,
    #[serde(default)]
    pub audience: Option<String>,
}

impl GenerationRequest {
    /// Check the request invariants: non-empty topic, word count in
    /// [300, 1000], source count in [2, 5].
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::InvalidRequest("topic must not be empty".to_string()));
        }
        if !(WORD_COUNT_MIN..=WORD_COUNT_MAX).contains(&self.target_word_count) {
            return Err(Error::InvalidRequest(format!(
                "target word count {} outside [{}, {}]",
                self.target_word_count, WORD_COUNT_MIN, WORD_COUNT_MAX
            )));
        }
        if !(SOURCE_COUNT_MIN..=SOURCE_COUNT_MAX).contains(&self.source_count) {
            return Err(Error::InvalidRequest(format!(
                "source count {} outside [{}, {}]",
                self.source_count, SOURCE_COUNT_MIN, SOURCE_COUNT_MAX
            )));
        }
        Ok(())
    }

    /// Audience string used in prompts, defaulting like the UI placeholder.
    pub fn audience_or_default(&self) -> &str {
        match self.audience.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => "a general audience",
        }
    }

    /// File name of the downloadable artifact for this topic.
    pub fn artifact_filename(&self) -> String {
        artifact_filename(&self.topic)
    }
}

/// Slugified download file name: spaces become underscores, `_article.md`
/// suffix.
pub fn artifact_filename(topic: &str) -> String {
    format!("{}_article.md", topic.replace(' ', "_"))
}

/// Session credentials for the LLM provider and the search provider.
///
/// Held in memory for the lifetime of one session and threaded explicitly
/// into the clients that need them; never persisted.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub llm_api_key: String,
    pub search_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("llm_api_key", &"[redacted]")
            .field("search_api_key", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> GenerationRequest {
        GenerationRequest {
            topic: "renewable energy".to_string(),
            model: ModelChoice::Fast,
            target_word_count: 500,
            source_count: 3,
            style: ArticleStyle::Informative,
            audience: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_topic_rejected() {
        let mut req = valid_request();
        req.topic = "   ".to_string();
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_word_count_bounds() {
        let mut req = valid_request();
        req.target_word_count = 299;
        assert!(req.validate().is_err());
        req.target_word_count = 300;
        assert!(req.validate().is_ok());
        req.target_word_count = 1000;
        assert!(req.validate().is_ok());
        req.target_word_count = 1001;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_source_count_bounds() {
        let mut req = valid_request();
        req.source_count = 1;
        assert!(req.validate().is_err());
        req.source_count = 2;
        assert!(req.validate().is_ok());
        req.source_count = 5;
        assert!(req.validate().is_ok());
        req.source_count = 6;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_artifact_filename_slugs_spaces() {
        assert_eq!(
            artifact_filename("renewable energy"),
            "renewable_energy_article.md"
        );
        assert_eq!(valid_request().artifact_filename(), "renewable_energy_article.md");
    }

    #[test]
    fn test_model_ids() {
        assert_eq!(ModelChoice::Fast.id(), "gpt-3.5-turbo");
        assert_eq!(ModelChoice::HighQuality.id(), "gpt-4o");
    }

    #[test]
    fn test_model_choice_wire_names() {
        let fast: ModelChoice = serde_json::from_str("\"fast\"").unwrap();
        assert_eq!(fast, ModelChoice::Fast);
        let hq: ModelChoice = serde_json::from_str("\"high-quality\"").unwrap();
        assert_eq!(hq, ModelChoice::HighQuality);
    }

    #[test]
    fn test_audience_default() {
        let mut req = valid_request();
        assert_eq!(req.audience_or_default(), "a general audience");
        req.audience = Some("".to_string());
        assert_eq!(req.audience_or_default(), "a general audience");
        req.audience = Some("students".to_string());
        assert_eq!(req.audience_or_default(), "students");
    }

    #[test]
    fn test_credentials_debug_redacts() {
        let creds = Credentials {
            llm_api_key: "sk-secret".to_string(),
            search_api_key: "serper-secret".to_string(),
        };
        let repr = format!("{creds:?}");
        assert!(!repr.contains("secret"));
        assert!(repr.contains("[redacted]"));
    }
}
