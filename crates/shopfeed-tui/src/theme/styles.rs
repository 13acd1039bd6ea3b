use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn panel_border() -> Style {
    Style::default().fg(PANEL_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn spinner_text() -> Style {
    Style::default().fg(SPINNER_TEXT)
}

pub fn end_text() -> Style {
    Style::default().fg(END_TEXT).add_modifier(Modifier::DIM)
}
