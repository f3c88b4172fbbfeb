use std::sync::Once;

use scout_core::{update, AppState, Effect, Msg, Source, Stock};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::QuerySubmitted)
}

fn stock(ticker: &str) -> Stock {
    Stock {
        ticker: ticker.to_string(),
        company_name: format!("{ticker} Inc."),
        growth_potential: "Strong demand outlook".to_string(),
        public_sentiment: "Broadly positive".to_string(),
    }
}

#[test]
fn research_success_populates_results() {
    init_logging();
    let (state, _) = submit(AppState::new(), "AI technology stocks");

    let (state, effects) = update(
        state,
        Msg::ResearchSucceeded {
            query_id: 1,
            stocks: vec![stock("NVDA")],
            sources: vec![Source {
                uri: "https://x".to_string(),
                title: "Y".to_string(),
            }],
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.stocks.len(), 1);
    assert_eq!(view.stocks[0].stock.ticker, "NVDA");
    assert!(!view.stocks[0].saved);
    assert_eq!(view.sources.len(), 1);
    assert_eq!(view.sources[0].uri, "https://x");
}

#[test]
fn research_failure_formats_message() {
    init_logging();
    let (state, _) = submit(AppState::new(), "AI technology stocks");

    let (state, effects) = update(
        state,
        Msg::ResearchFailed {
            query_id: 1,
            detail: Some("timeout".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch stock data: timeout. Please try again.")
    );
    assert!(view.stocks.is_empty());
}

#[test]
fn unrecognized_failure_uses_generic_message() {
    init_logging();
    let (state, _) = submit(AppState::new(), "AI technology stocks");

    let (state, _) = update(
        state,
        Msg::ResearchFailed {
            query_id: 1,
            detail: None,
        },
    );

    assert_eq!(
        state.view().error.as_deref(),
        Some("An unknown error occurred. Please try again.")
    );
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    // Two submissions back to back: the second one supersedes the first.
    let (state, _) = submit(AppState::new(), "AI technology stocks");
    let (mut state, effects) = submit(state, "renewable energy");
    assert_eq!(
        effects,
        vec![Effect::StartResearch {
            query_id: 2,
            query: "renewable energy".to_string(),
        }]
    );
    assert!(state.consume_dirty());

    // The late completion for the first query must not touch state.
    let (mut state, effects) = update(
        state,
        Msg::ResearchSucceeded {
            query_id: 1,
            stocks: vec![stock("NVDA")],
            sources: Vec::new(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().loading);
    assert!(state.view().stocks.is_empty());
    assert!(!state.consume_dirty());

    // The current query's completion still lands.
    let (state, _) = update(
        state,
        Msg::ResearchSucceeded {
            query_id: 2,
            stocks: vec![stock("ENPH")],
            sources: Vec::new(),
        },
    );
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.stocks[0].stock.ticker, "ENPH");
}

#[test]
fn completion_without_submission_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::ResearchFailed {
            query_id: 1,
            detail: Some("timeout".to_string()),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn result_cards_reflect_watchlist_membership() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::StockSaved(stock("NVDA")));
    let (state, _) = submit(state, "AI technology stocks");
    let (state, _) = update(
        state,
        Msg::ResearchSucceeded {
            query_id: 1,
            stocks: vec![stock("NVDA"), stock("AMD")],
            sources: Vec::new(),
        },
    );

    let view = state.view();
    assert!(view.stocks[0].saved);
    assert!(!view.stocks[1].saved);
}
