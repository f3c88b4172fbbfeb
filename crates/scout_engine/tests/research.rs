use std::time::Duration;

use pretty_assertions::assert_eq;
use scout_engine::{FailureKind, HttpResearchProvider, ResearchProvider, ResearchSettings};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ResearchSettings {
    ResearchSettings {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..ResearchSettings::default()
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn provider_parses_successful_completion() {
    let server = MockServer::start().await;
    let payload = r#"```json
{"stocks":[{"ticker":"NVDA","company_name":"Nvidia","growth_potential":"Data-center demand","public_sentiment":"Bullish"}],"sources":[{"uri":"https://x","title":"Y"}]}
```"#;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(payload)))
        .mount(&server)
        .await;

    let provider = HttpResearchProvider::new(settings_for(&server));
    let outcome = provider.research("AI technology stocks").await.expect("research ok");

    assert_eq!(outcome.stocks.len(), 1);
    assert_eq!(outcome.stocks[0].ticker, "NVDA");
    assert_eq!(outcome.stocks[0].company_name, "Nvidia");
    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(outcome.sources[0].uri, "https://x");
}

#[tokio::test]
async fn provider_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpResearchProvider::new(settings_for(&server));
    let err = provider.research("AI technology stocks").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn provider_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(completion_body("{}")),
        )
        .mount(&server)
        .await;

    let settings = ResearchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let provider = HttpResearchProvider::new(settings);
    let err = provider.research("AI technology stocks").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn provider_rejects_empty_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
        .mount(&server)
        .await;

    let provider = HttpResearchProvider::new(settings_for(&server));
    let err = provider.research("AI technology stocks").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::EmptyCompletion);
}

#[tokio::test]
async fn provider_rejects_non_json_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Sorry, I cannot answer that.")),
        )
        .mount(&server)
        .await;

    let provider = HttpResearchProvider::new(settings_for(&server));
    let err = provider.research("AI technology stocks").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedPayload);
}

#[tokio::test]
async fn provider_requires_api_key() {
    let settings = ResearchSettings::default();
    let provider = HttpResearchProvider::new(settings);

    let err = provider.research("AI technology stocks").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingApiKey);
}
