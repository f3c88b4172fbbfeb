use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;
use scout_core::{AppViewModel, Source, StockCardView, Tab, EXAMPLE_QUERIES};

use crate::app::{InputMode, UiState};
use crate::ui::theme;

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let [tabs_area, input_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, tabs_area, view);
    draw_query_input(frame, input_area, view, ui);
    match view.tab {
        Tab::Search => draw_search(frame, body_area, view, ui),
        Tab::Watchlist => draw_watchlist(frame, body_area, view, ui),
    }
    draw_footer(frame, footer_area, ui);
}

fn draw_tabs(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let selected = match view.tab {
        Tab::Search => 0,
        Tab::Watchlist => 1,
    };
    let titles = vec![
        Line::from("Search"),
        Line::from(format!("Watchlist ({})", view.watchlist.len())),
    ];
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(theme::title());
    frame.render_widget(tabs, area);
}

fn draw_query_input(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let title = if view.loading {
        Span::styled("Sector or trend (researching...)", theme::loading())
    } else {
        Span::raw("Sector or trend")
    };
    let input = Paragraph::new(view.query_input.as_str())
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if ui.input_mode == InputMode::Editing {
        let cursor_x = area.x + 1 + view.query_input.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_search(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let sources_height = if view.sources.is_empty() {
        0
    } else {
        (view.sources.len() as u16 + 2).min(8)
    };
    let [status_area, stocks_area, sources_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(sources_height),
    ])
    .areas(area);

    frame.render_widget(status_line(view), status_area);
    draw_stock_list(frame, stocks_area, "Results", &view.stocks, ui);
    if !view.sources.is_empty() {
        draw_sources(frame, sources_area, &view.sources);
    }
}

fn status_line(view: &AppViewModel) -> Paragraph<'_> {
    let line = if let Some(error) = &view.error {
        Line::styled(error.as_str(), theme::error())
    } else if view.loading {
        Line::styled("Researching...", theme::loading())
    } else if view.stocks.is_empty() {
        let examples = EXAMPLE_QUERIES
            .iter()
            .enumerate()
            .map(|(i, query)| format!("{}) {}", i + 1, query))
            .collect::<Vec<_>>()
            .join("  ");
        Line::styled(format!("Examples: {examples}"), theme::hint())
    } else {
        Line::styled(format!("{} candidates", view.stocks.len()), theme::hint())
    };
    Paragraph::new(line)
}

fn draw_watchlist(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    if view.watchlist.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No saved stocks yet. Save one from the search results.",
            theme::hint(),
        ))
        .block(Block::default().borders(Borders::ALL).title("Watchlist"));
        frame.render_widget(empty, area);
        return;
    }

    let cards: Vec<StockCardView> = view
        .watchlist
        .iter()
        .map(|stock| StockCardView {
            stock: stock.clone(),
            saved: true,
        })
        .collect();
    draw_stock_list(frame, area, "Watchlist", &cards, ui);
}

fn draw_stock_list(frame: &mut Frame, area: Rect, title: &str, cards: &[StockCardView], ui: &UiState) {
    let items: Vec<ListItem> = cards.iter().map(card_item).collect();
    let mut list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    if ui.input_mode == InputMode::Browsing {
        list = list.highlight_style(theme::selected());
    }

    let mut list_state = ListState::default().with_selected(Some(ui.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn card_item(card: &StockCardView) -> ListItem<'_> {
    let marker = if card.saved {
        Span::styled("[saved] ", theme::saved())
    } else {
        Span::raw("        ")
    };
    let header = Line::from(vec![
        marker,
        Span::styled(card.stock.ticker.as_str(), theme::ticker()),
        Span::raw("  "),
        Span::raw(card.stock.company_name.as_str()),
    ]);
    let growth = Line::from(vec![
        Span::styled("  growth: ", theme::hint()),
        Span::raw(card.stock.growth_potential.as_str()),
    ]);
    let sentiment = Line::from(vec![
        Span::styled("  sentiment: ", theme::hint()),
        Span::raw(card.stock.public_sentiment.as_str()),
    ]);
    ListItem::new(Text::from(vec![header, growth, sentiment]))
}

fn draw_sources(frame: &mut Frame, area: Rect, sources: &[Source]) {
    let items: Vec<ListItem> = sources
        .iter()
        .map(|source| {
            let title = if source.title.is_empty() {
                source.uri.as_str()
            } else {
                source.title.as_str()
            };
            ListItem::new(Line::from(vec![
                Span::raw(title),
                Span::styled(format!("  {}", source.uri), theme::hint()),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Sources"));
    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, ui: &UiState) {
    let hints = match ui.input_mode {
        InputMode::Editing => "Enter submit | Esc browse | Ctrl-C quit",
        InputMode::Browsing => {
            "e edit | Tab switch view | Up/Down select | Enter save/remove | 1-4 examples | q quit"
        }
    };
    frame.render_widget(Paragraph::new(Line::styled(hints, theme::hint())), area);
}
