//! Scout core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;
mod watchlist;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, QueryId, Source, Stock, Tab, EXAMPLE_QUERIES};
pub use update::update;
pub use view_model::{AppViewModel, StockCardView};
pub use watchlist::Watchlist;
