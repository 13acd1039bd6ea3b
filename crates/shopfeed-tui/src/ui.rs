use crate::app::App;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use shopfeed_domain::{format_price, Product};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_feed(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Total: ", label_text()),
            Span::styled(format_price(app.controller.total_price()), bold_highlight()),
        ]),
        Line::from(Span::styled(
            format!("{} products fetched", app.controller.item_count()),
            label_text(),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(panel_border())
            .title(" shopfeed "),
    );
    frame.render_widget(header, area);
}

fn render_feed(app: &mut App, frame: &mut Frame, area: Rect) {
    app.viewport_height = area.height.saturating_sub(2) as usize;

    let products = app.controller.items();
    let info = app.scroll.window(app.viewport_height);

    let items: Vec<ListItem> = info
        .visible_rows
        .iter()
        .map(|&row| {
            if row < products.len() {
                ListItem::new(product_line(&products[row]))
            } else {
                ListItem::new(marker_line(app))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(panel_border())
            .title(" products "),
    );
    frame.render_widget(list, area);
}

fn product_line(product: &Product) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<34}", truncate(&product.name, 32)), normal_text()),
        Span::styled(format!("{:>14}", format_price(product.price)), highlight_text()),
        Span::styled(format!("   {}", product.bought_date_display()), label_text()),
    ])
}

/// The one row rendered past the last product: spinner while a page is in
/// flight, a closing line once the source is exhausted, otherwise the
/// invisible marker the sentinel watches.
fn marker_line(app: &App) -> Line<'static> {
    if app.controller.is_loading() {
        let glyph = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!("{} Loading more products...", glyph),
            spinner_text(),
        ))
    } else if app.controller.is_exhausted() {
        Line::from(Span::styled("end of catalog", end_text()))
    } else {
        Line::from("")
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let info = app.scroll.window(app.viewport_height);

    let mut spans = vec![Span::styled(
        "j/k scroll  g/G top/bottom  r retry  q quit",
        label_text(),
    )];

    if info.show_above_indicator || info.show_below_indicator {
        spans.push(Span::styled(
            format!("   ↑{} ↓{}", info.rows_above, info.rows_below),
            label_text(),
        ));
    }

    spans.push(Span::raw("   "));
    spans.push(status_span(app));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(panel_border()),
    );
    frame.render_widget(footer, area);
}

fn status_span(app: &App) -> Span<'static> {
    if app.controller.is_loading() {
        Span::styled(
            format!("loading page {}...", app.controller.next_page()),
            spinner_text(),
        )
    } else if app.controller.is_exhausted() {
        Span::styled(
            format!("all {} products loaded", app.controller.item_count()),
            end_text(),
        )
    } else {
        Span::styled(format!("page {}", app.controller.next_page()), normal_text())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
