//! Orchestration properties of the three-stage pipeline, exercised with
//! stub stage runners.

use async_trait::async_trait;
use pressroom::{
    ArticleStyle, Error, GenerationRequest, ModelChoice, ProgressCallback, ProgressEvent,
    StageRunner, generate_article,
};
use std::sync::{Arc, Mutex};

fn valid_request() -> GenerationRequest {
    GenerationRequest {
        topic: "renewable energy".to_string(),
        model: ModelChoice::Fast,
        target_word_count: 500,
        source_count: 3,
        style: ArticleStyle::Informative,
        audience: Some("students".to_string()),
    }
}

/// Returns canned text per stage and records every task and its context.
#[derive(Default)]
struct StubRunner {
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

#[async_trait]
impl StageRunner for StubRunner {
    async fn run(&self, task: &str, context: &[(&str, &str)]) -> pressroom::Result<String> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((
            task.to_string(),
            context
                .iter()
                .map(|(l, t)| (l.to_string(), t.to_string()))
                .collect(),
        ));
        Ok(match calls.len() {
            1 => "1. [Source](https://example.com)".to_string(),
            2 => "Source summaries".to_string(),
            _ => "# Final Article".to_string(),
        })
    }
}

/// Fails on the stage whose (1-based) index matches `fail_on`.
struct FailingRunner {
    fail_on: usize,
    calls: Mutex<usize>,
}

#[async_trait]
impl StageRunner for FailingRunner {
    async fn run(&self, _task: &str, _context: &[(&str, &str)]) -> pressroom::Result<String> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls == self.fail_on {
            Err(Error::EmptyCompletion)
        } else {
            Ok("stage text".to_string())
        }
    }
}

fn collecting_progress() -> (ProgressCallback, Arc<Mutex<Vec<ProgressEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let callback: ProgressCallback = Arc::new(move |event: &ProgressEvent| {
        sink.lock().unwrap().push(*event);
    });
    (callback, events)
}

#[tokio::test]
async fn test_returns_three_stage_texts_in_order() {
    let runner = StubRunner::default();
    let bundle = generate_article(&runner, &valid_request(), None)
        .await
        .unwrap();

    assert_eq!(bundle.research, "1. [Source](https://example.com)");
    assert_eq!(bundle.analysis, "Source summaries");
    assert_eq!(bundle.article, "# Final Article");
}

#[tokio::test]
async fn test_stage_tasks_carry_configuration() {
    let runner = StubRunner::default();
    generate_article(&runner, &valid_request(), None)
        .await
        .unwrap();

    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.len(), 3);

    // Research asks for exactly source_count URLs on the topic.
    assert!(calls[0].0.contains("Find 3"));
    assert!(calls[0].0.contains("'renewable energy'"));
    assert!(calls[0].1.is_empty());

    // Analysis receives the raw research text as context.
    assert_eq!(calls[1].1.len(), 1);
    assert_eq!(calls[1].1[0].0, "research");
    assert_eq!(calls[1].1[0].1, "1. [Source](https://example.com)");

    // Writing receives both prior stages and the word/style/audience knobs.
    assert!(calls[2].0.contains("informative"));
    assert!(calls[2].0.contains("500 words"));
    assert!(calls[2].0.contains("students"));
    assert_eq!(calls[2].1.len(), 2);
    assert_eq!(calls[2].1[0].0, "research");
    assert_eq!(calls[2].1[1].0, "analysis");
    assert_eq!(calls[2].1[1].1, "Source summaries");
}

#[tokio::test]
async fn test_progress_fires_six_fixed_milestones() {
    let runner = StubRunner::default();
    let (callback, events) = collecting_progress();

    generate_article(&runner, &valid_request(), Some(callback))
        .await
        .unwrap();

    let events = events.lock().unwrap();
    let percents: Vec<u8> = events.iter().map(|e| e.percent).collect();
    assert_eq!(percents, vec![15, 30, 45, 60, 75, 100]);

    let stages: Vec<&str> = events.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec!["Research", "Research", "Analysis", "Analysis", "Writing", "Complete"]
    );
}

#[tokio::test]
async fn test_analysis_failure_propagates_and_discards_research() {
    let runner = FailingRunner { fail_on: 2, calls: Mutex::new(0) };
    let (callback, events) = collecting_progress();

    let result = generate_article(&runner, &valid_request(), Some(callback)).await;
    assert!(matches!(result, Err(Error::EmptyCompletion)));

    // The writing stage never ran.
    assert_eq!(*runner.calls.lock().unwrap(), 2);

    // Only the milestones before the failure were reported.
    let percents: Vec<u8> = events.lock().unwrap().iter().map(|e| e.percent).collect();
    assert_eq!(percents, vec![15, 30, 45]);
}

#[tokio::test]
async fn test_invalid_request_fails_before_any_stage() {
    let runner = StubRunner::default();
    let mut request = valid_request();
    request.topic = String::new();

    let result = generate_article(&runner, &request, None).await;
    assert!(matches!(result, Err(Error::InvalidRequest(_))));
    assert!(runner.calls.lock().unwrap().is_empty());
}
