use crate::{AppState, Effect, Msg, EXAMPLE_QUERIES};

const BLANK_QUERY_MESSAGE: &str = "Please enter a market sector or trend to research.";
const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query_input(text);
            Vec::new()
        }
        Msg::QuerySubmitted => submit_query(&mut state),
        Msg::ExampleChosen(index) => match EXAMPLE_QUERIES.get(index) {
            Some(query) => {
                state.set_query_input((*query).to_string());
                submit_query(&mut state)
            }
            None => Vec::new(),
        },
        Msg::TabSelected(tab) => {
            state.set_tab(tab);
            Vec::new()
        }
        Msg::ResearchSucceeded {
            query_id,
            stocks,
            sources,
        } => {
            state.apply_research_success(query_id, stocks, sources);
            Vec::new()
        }
        Msg::ResearchFailed { query_id, detail } => {
            let message = match detail {
                Some(detail) => format!("Failed to fetch stock data: {detail}. Please try again."),
                None => UNKNOWN_FAILURE_MESSAGE.to_string(),
            };
            state.apply_research_failure(query_id, message);
            Vec::new()
        }
        Msg::StockSaved(stock) => {
            if state.add_to_watchlist(stock) {
                vec![Effect::PersistWatchlist {
                    stocks: state.watchlist_snapshot(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::StockRemoved { ticker } => {
            if state.remove_from_watchlist(&ticker) {
                vec![Effect::PersistWatchlist {
                    stocks: state.watchlist_snapshot(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::WatchlistRestored(stocks) => {
            state.restore_watchlist(stocks);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_query(state: &mut AppState) -> Vec<Effect> {
    let query = state.query_input().trim().to_string();
    if query.is_empty() {
        state.set_error(BLANK_QUERY_MESSAGE);
        return Vec::new();
    }

    let query_id = state.begin_research();
    vec![Effect::StartResearch { query_id, query }]
}
