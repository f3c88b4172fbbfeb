use std::fmt;

use thiserror::Error;

pub type QueryId = u64;

/// A candidate stock extracted from the model's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockPick {
    pub ticker: String,
    pub company_name: String,
    pub growth_potential: String,
    pub public_sentiment: String,
}

/// A citation returned alongside the picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResearchOutcome {
    pub stocks: Vec<StockPick>,
    pub sources: Vec<SourceRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ResearchCompleted {
        query_id: QueryId,
        result: Result<ResearchOutcome, ResearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ResearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl ResearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    MissingApiKey,
    HttpStatus(u16),
    Timeout,
    Network,
    EmptyCompletion,
    MalformedPayload,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingApiKey => write!(f, "missing API key"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::EmptyCompletion => write!(f, "empty model response"),
            FailureKind::MalformedPayload => write!(f, "malformed model response"),
        }
    }
}
