use std::path::PathBuf;

use scout_core::{Effect, Msg, Source, Stock};
use scout_engine::{
    EngineEvent, EngineHandle, FileStorage, ResearchSettings, SourceRef, StockPick, StoragePort,
};
use scout_logging::{scout_info, scout_warn};

use crate::persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    storage: FileStorage,
}

impl EffectRunner {
    pub fn new() -> Self {
        let data_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let engine = EngineHandle::new(research_settings_from_env());
        Self {
            engine,
            storage: FileStorage::new(data_dir),
        }
    }

    pub fn storage(&self) -> &dyn StoragePort {
        &self.storage
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartResearch { query_id, query } => {
                    scout_info!("StartResearch query_id={} query={}", query_id, query);
                    self.engine.enqueue(query_id, query);
                }
                Effect::PersistWatchlist { stocks } => {
                    persistence::save_watchlist(&self.storage, &stocks);
                }
            }
        }
    }

    /// Drains completed research events into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::ResearchCompleted { query_id, result } => match result {
                    Ok(outcome) => msgs.push(Msg::ResearchSucceeded {
                        query_id,
                        stocks: outcome.stocks.into_iter().map(map_stock).collect(),
                        sources: outcome.sources.into_iter().map(map_source).collect(),
                    }),
                    Err(err) => {
                        scout_warn!("Research {} failed: {}", query_id, err);
                        msgs.push(Msg::ResearchFailed {
                            query_id,
                            detail: Some(err.kind.to_string()),
                        });
                    }
                },
            }
        }
        msgs
    }
}

fn research_settings_from_env() -> ResearchSettings {
    let mut settings = ResearchSettings::default();
    if let Ok(value) = std::env::var("SECTOR_SCOUT_BASE_URL") {
        settings.base_url = value;
    }
    if let Ok(value) = std::env::var("SECTOR_SCOUT_API_KEY") {
        settings.api_key = value;
    }
    if let Ok(value) = std::env::var("SECTOR_SCOUT_MODEL") {
        settings.model = value;
    }
    settings
}

fn map_stock(pick: StockPick) -> Stock {
    Stock {
        ticker: pick.ticker,
        company_name: pick.company_name,
        growth_potential: pick.growth_potential,
        public_sentiment: pick.public_sentiment,
    }
}

fn map_source(source: SourceRef) -> Source {
    Source {
        uri: source.uri,
        title: source.title,
    }
}
