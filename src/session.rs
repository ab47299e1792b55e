//! Session-scoped state retained across requests.
//!
//! The only values that outlive one generation call: the two intermediate
//! stage texts (kept for display) and the last article body (kept for the
//! download route). Mutated only on successful completion of a request.

use crate::pipeline::ArticleBundle;
use crate::request::GenerationRequest;

/// The last article, ready to serve as a download.
#[derive(Debug, Clone)]
pub struct StoredArticle {
    pub filename: String,
    pub body: String,
}

/// Per-session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub last_research: Option<String>,
    pub last_analysis: Option<String>,
    pub last_article: Option<StoredArticle>,
}

impl Session {
    /// Record the results of a successful generation.
    pub fn record(&mut self, request: &GenerationRequest, bundle: &ArticleBundle) {
        self.last_research = Some(bundle.research.clone());
        self.last_analysis = Some(bundle.analysis.clone());
        self.last_article = Some(StoredArticle {
            filename: request.artifact_filename(),
            body: bundle.article.clone(),
        });
    }
}
