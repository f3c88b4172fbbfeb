use std::sync::Once;

use scout_core::{update, AppState, Effect, Msg, Source, Stock, Tab, EXAMPLE_QUERIES};

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
fn blank_query_is_refused_without_effects() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = submit(state, "   \t ");
    let view = next.view();

    assert!(effects.is_empty());
    assert!(!view.loading);
    assert_eq!(
        view.error.as_deref(),
        Some("Please enter a market sector or trend to research.")
    );
    assert!(next.consume_dirty());
}

#[test]
fn submission_starts_research_and_resets_slate() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = submit(state, "AI technology stocks");
    assert_eq!(
        effects,
        vec![Effect::StartResearch {
            query_id: 1,
            query: "AI technology stocks".to_string(),
        }]
    );
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.error, None);
    assert!(view.stocks.is_empty());

    // Populate results, then resubmit: the slate clears again and a fresh
    // query id is allocated.
    let (state, _) = update(
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
    assert_eq!(state.view().stocks.len(), 1);

    let (state, effects) = submit(state, "quantum computing");
    assert_eq!(
        effects,
        vec![Effect::StartResearch {
            query_id: 2,
            query: "quantum computing".to_string(),
        }]
    );
    let view = state.view();
    assert!(view.loading);
    assert!(view.stocks.is_empty());
    assert!(view.sources.is_empty());
}

#[test]
fn query_is_trimmed_before_dispatch() {
    init_logging();
    let (_state, effects) = submit(AppState::new(), "  solar energy  ");

    assert_eq!(
        effects,
        vec![Effect::StartResearch {
            query_id: 1,
            query: "solar energy".to_string(),
        }]
    );
}

#[test]
fn validation_error_clears_on_next_valid_submission() {
    init_logging();
    let (state, _) = submit(AppState::new(), "");
    assert!(state.view().error.is_some());

    let (state, effects) = submit(state, "semiconductors");
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().error, None);
}

#[test]
fn example_choice_sets_text_and_submits() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExampleChosen(0));

    let view = state.view();
    assert_eq!(view.query_input, EXAMPLE_QUERIES[0]);
    assert!(view.loading);
    assert_eq!(
        effects,
        vec![Effect::StartResearch {
            query_id: 1,
            query: EXAMPLE_QUERIES[0].to_string(),
        }]
    );
}

#[test]
fn example_choice_out_of_range_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::ExampleChosen(EXAMPLE_QUERIES.len()));

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn switching_tabs_keeps_results() {
    init_logging();
    let (state, _) = submit(AppState::new(), "AI technology stocks");
    let (state, _) = update(
        state,
        Msg::ResearchSucceeded {
            query_id: 1,
            stocks: vec![stock("NVDA"), stock("AMD")],
            sources: Vec::new(),
        },
    );

    let (state, effects) = update(state, Msg::TabSelected(Tab::Watchlist));
    assert!(effects.is_empty());
    assert_eq!(state.view().tab, Tab::Watchlist);

    let (state, _) = update(state, Msg::TabSelected(Tab::Search));
    let view = state.view();
    assert_eq!(view.tab, Tab::Search);
    assert_eq!(view.stocks.len(), 2);
}
