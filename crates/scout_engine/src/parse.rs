use serde::Deserialize;

use crate::{FailureKind, ResearchError, ResearchOutcome, SourceRef, StockPick};

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    stocks: Vec<PayloadStock>,
    #[serde(default)]
    sources: Vec<PayloadSource>,
}

#[derive(Debug, Deserialize)]
struct PayloadStock {
    ticker: String,
    #[serde(default, alias = "companyName")]
    company_name: String,
    #[serde(default, alias = "growthPotential")]
    growth_potential: String,
    #[serde(default, alias = "publicSentiment")]
    public_sentiment: String,
}

#[derive(Debug, Deserialize)]
struct PayloadSource {
    #[serde(alias = "url")]
    uri: String,
    #[serde(default)]
    title: String,
}

/// Deserializes the JSON object embedded in a completion, tolerating markdown
/// code fences and camelCase field names.
pub fn parse_research_payload(text: &str) -> Result<ResearchOutcome, ResearchError> {
    let json = extract_json_object(text).ok_or_else(|| {
        ResearchError::new(FailureKind::MalformedPayload, "no JSON object in completion")
    })?;
    let payload: Payload = serde_json::from_str(json)
        .map_err(|err| ResearchError::new(FailureKind::MalformedPayload, err.to_string()))?;

    Ok(ResearchOutcome {
        stocks: payload
            .stocks
            .into_iter()
            .map(|stock| StockPick {
                ticker: stock.ticker,
                company_name: stock.company_name,
                growth_potential: stock.growth_potential,
                public_sentiment: stock.public_sentiment,
            })
            .collect(),
        sources: payload
            .sources
            .into_iter()
            .map(|source| SourceRef {
                uri: source.uri,
                title: source.title,
            })
            .collect(),
    })
}

fn extract_json_object(text: &str) -> Option<&str> {
    let stripped = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let start = stripped.find('{')?;
    let end = stripped.rfind('}')?;
    (start <= end).then(|| &stripped[start..=end])
}
