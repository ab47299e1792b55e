//! Single-URL fetch-and-extract capability.
//!
//! Used by the agent during the analysis stage. Every failure path returns
//! a sentinel string instead of an error: malformed URLs, transport
//! failures, and thin pages all degrade to descriptive text.

use crate::tool::Tool;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Extracted text is capped at this many characters.
const MAX_CONTENT_CHARS: usize = 2500;

/// Pages with this many characters or fewer are reported as insufficient.
const MIN_CONTENT_CHARS: usize = 50;

/// Per-request timeout for one page download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches a page and returns its readable text.
pub struct FetchTool {
    http: reqwest::Client,
}

impl FetchTool {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }

    async fn download(&self, url: &Url) -> reqwest::Result<String> {
        let response = self
            .http
            .get(url.clone())
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}

impl Default for FetchTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull readable text out of an HTML document: paragraph text joined by
/// blank lines, falling back to the whole document's text for pages
/// without `<p>` markup.
fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p").unwrap();

    let text: String = document
        .select(&paragraphs)
        .map(|p| p.text().collect::<String>())
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    if !text.trim().is_empty() {
        return text.trim().to_string();
    }

    document
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

#[async_trait]
impl Tool for FetchTool {
    fn name(&self) -> &str {
        "fetch_article"
    }

    fn description(&self) -> &str {
        "Fetch article text from a URL with robust error handling. Input: the URL to fetch."
    }

    async fn call(&self, input: &str) -> String {
        let raw = input.trim();

        let url = match Url::parse(raw) {
            Ok(parsed) if !parsed.scheme().is_empty() && parsed.has_host() => parsed,
            _ => return format!("Invalid URL format: {raw}"),
        };

        match self.download(&url).await {
            Ok(body) => {
                let content = extract_text(&body);
                if content.chars().count() > MIN_CONTENT_CHARS {
                    content.chars().take(MAX_CONTENT_CHARS).collect()
                } else {
                    format!("Insufficient content from {raw}")
                }
            }
            Err(e) => {
                tracing::error!(url = %raw, error = %e, "error fetching article");
                format!("Error fetching content from {raw}: {e}")
            }
        }
    }
}
