//! End-to-end pipeline tests: mock document server plus an in-process generator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paper_summarizer_core::summary::prompts::{SECOND_PASS_TEXT_BUDGET, TRUNCATION_MARKER};
use paper_summarizer_core::summary::{FIRST_PASS_PLACEHOLDER, SECOND_PASS_PLACEHOLDER};
use paper_summarizer_core::{
    FetchConfig, GenerationError, GenerationRequest, PaperExtractor, PipelineOutcome, Summarizer,
    SummaryPipeline, TextGenerator,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

mod support;
use support::socket_guard::start_mock_server_or_skip;

/// Generator that fails the first call and echoes a fixed reply afterwards.
#[derive(Default)]
struct FlakyFirstGenerator {
    requests: Mutex<Vec<GenerationRequest>>,
}

#[async_trait]
impl TextGenerator for FlakyFirstGenerator {
    fn name(&self) -> &'static str {
        "flaky-first"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        if requests.len() == 1 {
            Err(GenerationError::Network("connection reset".to_string()))
        } else {
            Ok("Detailed analysis.".to_string())
        }
    }
}

/// Generator that always fails.
struct DownGenerator;

#[async_trait]
impl TextGenerator for DownGenerator {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::api(503, "service unavailable"))
    }
}

fn pipeline(generator: Arc<dyn TextGenerator>) -> SummaryPipeline {
    let extractor = PaperExtractor::new(&FetchConfig::default()).unwrap();
    SummaryPipeline::new(extractor, Summarizer::new(generator))
}

#[tokio::test]
async fn test_message_without_url_is_no_reference() {
    let outcome = pipeline(Arc::new(DownGenerator))
        .handle_message("can you summarize the attention paper?")
        .await;
    assert!(matches!(outcome, PipelineOutcome::NoReference));
    assert!(outcome.user_message().contains("couldn't find a paper link"));
}

#[tokio::test]
async fn test_unreachable_reference_is_extraction_failure() {
    let outcome = pipeline(Arc::new(DownGenerator))
        .handle_message("please read http://127.0.0.1:9/paper")
        .await;
    match &outcome {
        PipelineOutcome::ExtractionFailed { reference, .. } => {
            assert_eq!(reference, "http://127.0.0.1:9/paper");
        }
        other => panic!("expected ExtractionFailed, got: {other:?}"),
    }
    assert!(outcome.report().is_none());
}

#[tokio::test]
async fn test_first_pass_failure_still_produces_report() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };

    let long_body = "x".repeat(SECOND_PASS_TEXT_BUDGET + 500);
    let page = format!(
        "<html><head><title>Tab Title</title></head><body><h1>Deep Results</h1>\
         <div class=\"paper-abstract\">We show things.</div><article>{long_body}</article></body></html>"
    );
    Mock::given(method("GET"))
        .and(path("/deep"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let generator = Arc::new(FlakyFirstGenerator::default());
    let message = format!("have a look at {}/deep thanks", mock_server.uri());
    let outcome = pipeline(generator.clone()).handle_message(&message).await;

    let report = outcome.report().expect("summarized outcome");
    assert_eq!(report.title(), "Deep Results");
    assert_eq!(report.first_pass(), FIRST_PASS_PLACEHOLDER);
    assert_eq!(report.second_pass(), "Detailed analysis.");

    let rendered = report.to_string();
    assert!(rendered.starts_with("# Summary of \"Deep Results\""));
    assert!(!rendered.contains(SECOND_PASS_PLACEHOLDER));

    let requests = generator.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].task_input.contains("Abstract: We show things."));
    let expected_excerpt = format!("{}{}", "x".repeat(SECOND_PASS_TEXT_BUDGET), TRUNCATION_MARKER);
    assert!(requests[1].task_input.ends_with(&expected_excerpt));
    assert!(!requests[1].task_input.contains(&"x".repeat(SECOND_PASS_TEXT_BUDGET + 1)));
}

#[tokio::test]
async fn test_backend_down_renders_both_placeholders() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };

    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h2>Short</h2><p>Only paragraph.</p></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let outcome = pipeline(Arc::new(DownGenerator))
        .handle_reference(format!("{}/short", mock_server.uri()))
        .await;

    let text = outcome.user_message();
    assert!(text.starts_with("Here's the summary of the paper:"));
    assert!(text.contains(FIRST_PASS_PLACEHOLDER));
    assert!(text.contains(SECOND_PASS_PLACEHOLDER));
}
