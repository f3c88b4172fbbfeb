//! Best-effort watchlist persistence over the storage port.
//!
//! Failures here are logged and swallowed: the session simply behaves as if
//! the watchlist were empty (on load) or as if the write never happened.

use scout_core::Stock;
use scout_engine::StoragePort;
use scout_logging::{scout_error, scout_info, scout_warn};
use serde::{Deserialize, Serialize};

pub(crate) const WATCHLIST_KEY: &str = "watchlist";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedStock {
    ticker: String,
    company_name: String,
    growth_potential: String,
    public_sentiment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedWatchlist {
    stocks: Vec<PersistedStock>,
}

pub(crate) fn load_watchlist(storage: &dyn StoragePort) -> Vec<Stock> {
    let content = match storage.get(WATCHLIST_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            scout_warn!("Failed to read persisted watchlist: {}", err);
            return Vec::new();
        }
    };

    let persisted: PersistedWatchlist = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            scout_warn!("Failed to parse persisted watchlist: {}", err);
            return Vec::new();
        }
    };

    let stocks: Vec<Stock> = persisted
        .stocks
        .into_iter()
        .map(|stock| Stock {
            ticker: stock.ticker,
            company_name: stock.company_name,
            growth_potential: stock.growth_potential,
            public_sentiment: stock.public_sentiment,
        })
        .collect();

    scout_info!("Loaded persisted watchlist with {} entries", stocks.len());
    stocks
}

pub(crate) fn save_watchlist(storage: &dyn StoragePort, stocks: &[Stock]) {
    let persisted = PersistedWatchlist {
        stocks: stocks
            .iter()
            .map(|stock| PersistedStock {
                ticker: stock.ticker.clone(),
                company_name: stock.company_name.clone(),
                growth_potential: stock.growth_potential.clone(),
                public_sentiment: stock.public_sentiment.clone(),
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            scout_error!("Failed to serialize watchlist: {}", err);
            return;
        }
    };

    if let Err(err) = storage.set(WATCHLIST_KEY, &content) {
        scout_error!("Failed to write watchlist: {}", err);
    }
}
