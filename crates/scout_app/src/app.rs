use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use scout_core::{update, AppState, AppViewModel, Msg, Tab, EXAMPLE_QUERIES};

use crate::effects::EffectRunner;
use crate::persistence;
use crate::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keystrokes edit the query text.
    #[default]
    Editing,
    /// Keystrokes navigate results and the watchlist.
    Browsing,
}

/// Shell-local interaction state. Everything the session depends on lives in
/// `scout_core::AppState`; this is only input focus and list selection.
#[derive(Debug, Default)]
pub struct UiState {
    pub input_mode: InputMode,
    pub selected: usize,
}

pub fn run_app() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let runner = EffectRunner::new();
    let mut state = AppState::new();
    let mut ui_state = UiState::default();

    // Hydrate the watchlist before the first render.
    let restored = persistence::load_watchlist(runner.storage());
    state = dispatch(state, Msg::WatchlistRestored(restored), &runner);

    state.consume_dirty();
    let mut view = state.view();
    loop {
        terminal.draw(|frame| ui::render::draw(frame, &view, &ui_state))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key_to_action(key.code, key.modifiers, &mut ui_state, &view) {
                        Action::Quit => break,
                        Action::Dispatch(msg) => state = dispatch(state, msg, &runner),
                        Action::None => {}
                    }
                }
            }
        }

        for msg in runner.poll() {
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            view = state.view();
            clamp_selection(&mut ui_state, &view);
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    Dispatch(Msg),
}

fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    ui_state: &mut UiState,
    view: &AppViewModel,
) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match ui_state.input_mode {
        InputMode::Editing => match code {
            // The submit affordance is disabled while a request is in flight.
            KeyCode::Enter if view.loading => Action::None,
            KeyCode::Enter => Action::Dispatch(Msg::QuerySubmitted),
            KeyCode::Esc => {
                ui_state.input_mode = InputMode::Browsing;
                Action::None
            }
            KeyCode::Backspace => {
                let mut text = view.query_input.clone();
                text.pop();
                Action::Dispatch(Msg::QueryChanged(text))
            }
            KeyCode::Char(ch) => {
                let mut text = view.query_input.clone();
                text.push(ch);
                Action::Dispatch(Msg::QueryChanged(text))
            }
            _ => Action::None,
        },
        InputMode::Browsing => match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('e') | KeyCode::Char('/') => {
                ui_state.input_mode = InputMode::Editing;
                Action::None
            }
            KeyCode::Tab => {
                ui_state.selected = 0;
                let tab = match view.tab {
                    Tab::Search => Tab::Watchlist,
                    Tab::Watchlist => Tab::Search,
                };
                Action::Dispatch(Msg::TabSelected(tab))
            }
            KeyCode::Up => {
                ui_state.selected = ui_state.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                let rows = row_count(view);
                if rows > 0 {
                    ui_state.selected = (ui_state.selected + 1).min(rows - 1);
                }
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => toggle_selected(ui_state, view),
            KeyCode::Char(ch @ '1'..='9') => {
                let index = ch as usize - '1' as usize;
                if view.loading || index >= EXAMPLE_QUERIES.len() {
                    Action::None
                } else {
                    Action::Dispatch(Msg::ExampleChosen(index))
                }
            }
            _ => Action::None,
        },
    }
}

fn row_count(view: &AppViewModel) -> usize {
    match view.tab {
        Tab::Search => view.stocks.len(),
        Tab::Watchlist => view.watchlist.len(),
    }
}

fn clamp_selection(ui_state: &mut UiState, view: &AppViewModel) {
    let rows = row_count(view);
    if rows == 0 {
        ui_state.selected = 0;
    } else {
        ui_state.selected = ui_state.selected.min(rows - 1);
    }
}

fn toggle_selected(ui_state: &mut UiState, view: &AppViewModel) -> Action {
    match view.tab {
        Tab::Search => match view.stocks.get(ui_state.selected) {
            Some(card) if card.saved => Action::Dispatch(Msg::StockRemoved {
                ticker: card.stock.ticker.clone(),
            }),
            Some(card) => Action::Dispatch(Msg::StockSaved(card.stock.clone())),
            None => Action::None,
        },
        Tab::Watchlist => match view.watchlist.get(ui_state.selected) {
            Some(stock) => Action::Dispatch(Msg::StockRemoved {
                ticker: stock.ticker.clone(),
            }),
            None => Action::None,
        },
    }
}
