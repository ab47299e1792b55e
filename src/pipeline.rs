//! The three-stage article generation pipeline.
//!
//! Stages run strictly one after another: research produces source links,
//! analysis summarizes each source, writing drafts the article. Each stage
//! receives the raw text of the prior stages as context. There is no retry
//! and no partial-result return; the first stage error aborts the request.

use crate::agent::StageRunner;
use crate::error::Result;
use crate::request::GenerationRequest;
use serde::Serialize;
use std::sync::Arc;

/// The three stage texts produced by one successful request.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleBundle {
    pub research: String,
    pub analysis: String,
    pub article: String,
}

/// One coarse progress milestone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressEvent {
    pub stage: &'static str,
    pub message: &'static str,
    pub percent: u8,
}

/// Callback invoked at each progress milestone.
pub type ProgressCallback = Arc<dyn Fn(&ProgressEvent) + Send + Sync>;

// Fixed milestone schedule, kept identical to the original for behavioral
// parity; percentages are not computed from real work done.
const RESEARCH_START: ProgressEvent = ProgressEvent {
    stage: "Research",
    message: "Searching for relevant sources...",
    percent: 15,
};
const RESEARCH_DONE: ProgressEvent = ProgressEvent {
    stage: "Research",
    message: "Found relevant sources!",
    percent: 30,
};
const ANALYSIS_START: ProgressEvent = ProgressEvent {
    stage: "Analysis",
    message: "Analyzing content from sources...",
    percent: 45,
};
const ANALYSIS_DONE: ProgressEvent = ProgressEvent {
    stage: "Analysis",
    message: "Source analysis complete!",
    percent: 60,
};
const WRITING_START: ProgressEvent = ProgressEvent {
    stage: "Writing",
    message: "Crafting your article...",
    percent: 75,
};
const COMPLETE: ProgressEvent = ProgressEvent {
    stage: "Complete",
    message: "Article generation completed successfully!",
    percent: 100,
};

fn report(progress: &Option<ProgressCallback>, event: &ProgressEvent) {
    if let Some(cb) = progress {
        cb(event);
    }
}

/// Generate an article on `request.topic`.
///
/// Runs the research, analysis, and writing stages sequentially against
/// `runner` and returns the three stage texts. Any stage error is logged
/// and propagated unchanged; earlier stage texts are discarded on failure.
pub async fn generate_article<R>(
    runner: &R,
    request: &GenerationRequest,
    progress: Option<ProgressCallback>,
) -> Result<ArticleBundle>
where
    R: StageRunner + ?Sized,
{
    request.validate()?;

    match run_stages(runner, request, &progress).await {
        Ok(bundle) => Ok(bundle),
        Err(e) => {
            tracing::error!(topic = %request.topic, error = %e, "error generating article");
            Err(e)
        }
    }
}

async fn run_stages<R>(
    runner: &R,
    request: &GenerationRequest,
    progress: &Option<ProgressCallback>,
) -> Result<ArticleBundle>
where
    R: StageRunner + ?Sized,
{
    // Stage 1: research. The source count is advisory, enforced only by
    // prompt instruction.
    report(progress, &RESEARCH_START);

    let research_task = format!(
        "Find {} relevant and authoritative URLs on '{}'. \
         Format as a numbered markdown list of links.",
        request.source_count, request.topic
    );
    let research = runner.run(&research_task, &[]).await?;

    report(progress, &RESEARCH_DONE);

    // Stage 2: analysis. The research text is passed as context; the agent
    // extracts and visits the URLs itself via the fetch tool.
    report(progress, &ANALYSIS_START);

    let analysis_task = format!(
        "Fetch and analyze the content from each URL related to '{}'. \
         Summarize each source in 2-3 sentences.",
        request.topic
    );
    let analysis = runner
        .run(&analysis_task, &[("research", &research)])
        .await?;

    report(progress, &ANALYSIS_DONE);

    // Stage 3: writing, grounded in both prior stages.
    report(progress, &WRITING_START);

    let writing_task = format!(
        "Write a {} article about '{}' that is approximately {} words. \
         Target audience: {}. \
         Format with markdown: include a compelling headline, introduction, \
         main content sections with subheadings, and a conclusion. \
         Base your article on the research and analysis results provided.",
        request.style.to_string().to_lowercase(),
        request.topic,
        request.target_word_count,
        request.audience_or_default(),
    );
    let article = runner
        .run(&writing_task, &[("research", &research), ("analysis", &analysis)])
        .await?;

    report(progress, &COMPLETE);

    Ok(ArticleBundle { research, analysis, article })
}
