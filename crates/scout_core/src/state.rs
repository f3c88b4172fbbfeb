use crate::view_model::{AppViewModel, StockCardView};
use crate::watchlist::Watchlist;

pub type QueryId = u64;

/// Queries offered as one-keypress shortcuts in the search view.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Artificial intelligence infrastructure",
    "Renewable energy storage",
    "Next-generation cybersecurity",
    "Obesity drug developers",
];

/// A candidate stock returned by the research service.
///
/// Watchlist membership is keyed by `ticker` alone; the free-text fields are
/// display material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    pub ticker: String,
    pub company_name: String,
    pub growth_potential: String,
    pub public_sentiment: String,
}

/// A citation accompanying a batch of research results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Watchlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query_input: String,
    tab: Tab,
    in_flight: Option<QueryId>,
    next_query_id: QueryId,
    stocks: Vec<Stock>,
    sources: Vec<Source>,
    error: Option<String>,
    watchlist: Watchlist,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let stocks = self
            .stocks
            .iter()
            .map(|stock| StockCardView {
                saved: self.watchlist.contains(&stock.ticker),
                stock: stock.clone(),
            })
            .collect();
        AppViewModel {
            tab: self.tab,
            query_input: self.query_input.clone(),
            loading: self.in_flight.is_some(),
            error: self.error.clone(),
            stocks,
            sources: self.sources.clone(),
            watchlist: self.watchlist.stocks().to_vec(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn watchlist_snapshot(&self) -> Vec<Stock> {
        self.watchlist.snapshot()
    }

    pub(crate) fn query_input(&self) -> &str {
        &self.query_input
    }

    pub(crate) fn set_query_input(&mut self, text: String) {
        if self.query_input != text {
            self.query_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.dirty = true;
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.dirty = true;
    }

    /// Allocates a query id and resets the result/error slate for a new request.
    ///
    /// Any response still pending for an earlier id becomes stale and is
    /// dropped by the `apply_research_*` guards.
    pub(crate) fn begin_research(&mut self) -> QueryId {
        self.next_query_id += 1;
        let query_id = self.next_query_id;
        self.in_flight = Some(query_id);
        self.stocks.clear();
        self.sources.clear();
        self.error = None;
        self.dirty = true;
        query_id
    }

    pub(crate) fn apply_research_success(
        &mut self,
        query_id: QueryId,
        stocks: Vec<Stock>,
        sources: Vec<Source>,
    ) {
        if self.in_flight != Some(query_id) {
            return;
        }
        self.in_flight = None;
        self.stocks = stocks;
        self.sources = sources;
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn apply_research_failure(&mut self, query_id: QueryId, message: String) {
        if self.in_flight != Some(query_id) {
            return;
        }
        self.in_flight = None;
        self.error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn add_to_watchlist(&mut self, stock: Stock) -> bool {
        let added = self.watchlist.add(stock);
        if added {
            self.dirty = true;
        }
        added
    }

    pub(crate) fn remove_from_watchlist(&mut self, ticker: &str) -> bool {
        let removed = self.watchlist.remove(ticker);
        if removed {
            self.dirty = true;
        }
        removed
    }

    pub(crate) fn restore_watchlist(&mut self, stocks: Vec<Stock>) {
        self.watchlist = Watchlist::from_stocks(stocks);
        self.dirty = true;
    }
}
