use ratatui::style::{Color, Modifier, Style};

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn ticker() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn saved() -> Style {
    Style::default().fg(Color::Green)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn loading() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
