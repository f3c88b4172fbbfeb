use crate::{Source, Stock, Tab};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tab: Tab,
    pub query_input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub stocks: Vec<StockCardView>,
    pub sources: Vec<Source>,
    pub watchlist: Vec<Stock>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCardView {
    pub stock: Stock,
    /// Decides whether the card offers a save or a remove affordance.
    pub saved: bool,
}
