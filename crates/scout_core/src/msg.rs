#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input box.
    QueryChanged(String),
    /// User submitted the current query for research.
    QuerySubmitted,
    /// User picked one of the built-in example queries.
    ExampleChosen(usize),
    /// User switched between the search and watchlist tabs.
    TabSelected(crate::Tab),
    /// Service client produced results for a submitted query.
    ResearchSucceeded {
        query_id: crate::QueryId,
        stocks: Vec<crate::Stock>,
        sources: Vec<crate::Source>,
    },
    /// Service client failed; `detail` carries the recognized failure text, if any.
    ResearchFailed {
        query_id: crate::QueryId,
        detail: Option<String>,
    },
    /// User saved a displayed stock to the watchlist.
    StockSaved(crate::Stock),
    /// User removed a stock from the watchlist.
    StockRemoved { ticker: String },
    /// Restore the previously persisted watchlist at startup.
    WatchlistRestored(Vec<crate::Stock>),
    /// Fallback for placeholder wiring.
    NoOp,
}
