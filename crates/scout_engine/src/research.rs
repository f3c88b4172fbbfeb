use std::time::Duration;

use scout_logging::scout_warn;
use serde::{Deserialize, Serialize};

use crate::parse::parse_research_payload;
use crate::{FailureKind, ResearchError, ResearchOutcome};

const SYSTEM_PROMPT: &str = "You are an equity research assistant. You identify publicly traded \
companies that match a market sector or trend and summarize their growth potential and current \
public sentiment. You respond with a single JSON object and nothing else.";

#[derive(Debug, Clone)]
pub struct ResearchSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub temperature: f64,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            temperature: 0.3,
        }
    }
}

#[async_trait::async_trait]
pub trait ResearchProvider: Send + Sync {
    async fn research(&self, query: &str) -> Result<ResearchOutcome, ResearchError>;
}

#[derive(Debug, Clone)]
pub struct HttpResearchProvider {
    settings: ResearchSettings,
}

impl HttpResearchProvider {
    pub fn new(settings: ResearchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ResearchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ResearchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ResearchProvider for HttpResearchProvider {
    async fn research(&self, query: &str) -> Result<ResearchOutcome, ResearchError> {
        if self.settings.api_key.is_empty() {
            return Err(ResearchError::new(
                FailureKind::MissingApiKey,
                "no API key configured",
            ));
        }

        let client = self.build_client()?;
        let url = format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_user_prompt(query),
                },
            ],
            temperature: self.settings.temperature,
        };

        let response = client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            scout_warn!("research request failed: {} {}", status, body);
            return Err(ResearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let completion: ChatResponse = response.json().await.map_err(map_reqwest_error)?;
        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.clone())
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(ResearchError::new(
                FailureKind::EmptyCompletion,
                "model returned no content",
            ));
        }

        parse_research_payload(&content)
    }
}

fn build_user_prompt(query: &str) -> String {
    format!(
        "List 4 to 6 publicly traded companies relevant to the market sector or trend \
\"{query}\". For each, give the exchange ticker, the company name, one sentence on growth \
potential, and one sentence on public sentiment. Cite the publications you drew on. Respond \
with only a JSON object of the form: {{\"stocks\": [{{\"ticker\": \"...\", \"company_name\": \
\"...\", \"growth_potential\": \"...\", \"public_sentiment\": \"...\"}}], \"sources\": \
[{{\"uri\": \"...\", \"title\": \"...\"}}]}}"
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ResearchError {
    if err.is_timeout() {
        return ResearchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ResearchError::new(FailureKind::MalformedPayload, err.to_string());
    }
    ResearchError::new(FailureKind::Network, err.to_string())
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
