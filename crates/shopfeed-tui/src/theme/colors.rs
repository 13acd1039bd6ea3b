use ratatui::style::Color;

pub const PANEL_BORDER: Color = Color::Cyan;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const SPINNER_TEXT: Color = Color::Cyan;
pub const END_TEXT: Color = Color::DarkGray;
