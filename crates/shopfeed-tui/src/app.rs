use std::io;
use std::sync::Arc;

use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use shopfeed_core::{PageSource, ScrollWindow, ShopfeedResult};
use shopfeed_domain::Product;
use tokio::sync::mpsc;

use crate::controller::{FeedController, FetchOutcome};
use crate::events::{Event, EventHandler};
use crate::ui;

pub struct App {
    pub should_quit: bool,
    pub controller: FeedController,
    /// Scroll state over the feed rows plus the one marker row at the tail.
    pub scroll: ScrollWindow,
    /// Rows the list area can show; set during rendering.
    pub viewport_height: usize,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(
        source: Arc<dyn PageSource<Product>>,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (controller, outcome_rx) = FeedController::new(source);
        let app = Self {
            should_quit: false,
            controller,
            scroll: ScrollWindow::new(1),
            viewport_height: 0,
            spinner_frame: 0,
        };
        (app, outcome_rx)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::PageDown => self.scroll.scroll_down(self.viewport_height.max(1)),
            KeyCode::PageUp => self.scroll.scroll_up(self.viewport_height.max(1)),
            KeyCode::Char('g') => self.scroll.jump_to_top(),
            KeyCode::Char('G') => self.scroll.jump_to_bottom(self.viewport_height),
            // Manual re-attempt; the feed guard makes this a no-op while a
            // fetch is in flight or after end-of-data.
            KeyCode::Char('r') => self.controller.trigger(),
            _ => {}
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            // The next draw picks up the new terminal size.
            Event::Resize(_, _) => {}
            Event::Tick => {
                if self.controller.is_loading() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
        }
    }

    /// Re-evaluate the marker row against the current viewport.
    fn observe_sentinel(&mut self) {
        let visible = self.scroll.last_row_visible(self.viewport_height);
        self.controller.observe_marker(visible);
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.controller.apply(outcome);
        self.scroll
            .set_total_rows(self.controller.item_count() + 1);
    }

    pub async fn run(
        &mut self,
        mut outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    ) -> ShopfeedResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.observe_sentinel();

            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => break,
                    }
                }
                outcome = outcome_rx.recv() => {
                    if let Some(outcome) = outcome {
                        self.apply_outcome(outcome);
                    }
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
