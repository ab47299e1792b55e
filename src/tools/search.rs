//! Web-search capability backed by a Serper-style endpoint.

use crate::tool::Tool;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";
const MAX_RESULTS: usize = 10;

#[derive(Serialize)]
struct SearchRequest {
    q: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Searches the web and returns results as formatted text.
pub struct SearchTool {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SearchTool {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the tool at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn search(&self, query: &str) -> reqwest::Result<SearchResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&SearchRequest { q: query.to_string() })
            .send()
            .await?
            .error_for_status()?;
        response.json().await
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search the web for information on a topic. Input: the search query."
    }

    async fn call(&self, input: &str) -> String {
        let query = input.trim();
        if query.is_empty() {
            return "Error: empty search query".to_string();
        }

        match self.search(query).await {
            Ok(response) if response.organic.is_empty() => {
                format!("No results found for: {query}")
            }
            Ok(response) => response
                .organic
                .iter()
                .take(MAX_RESULTS)
                .enumerate()
                .map(|(i, r)| format!("{}. {} - {}\n   {}", i + 1, r.title, r.link, r.snippet))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                tracing::error!(query = %query, error = %e, "search request failed");
                format!("Error searching for \"{query}\": {e}")
            }
        }
    }
}
