// Display surface state and main event loop.
// Drives the store's lifecycle (load on mount, periodic refresh) and maps keys to store intents.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::config::RefreshConfig;
use crate::state::{PostCursor, RefreshTimer};
use crate::store::{PostState, StoreContext};
use crate::ui::{self, View};

/// Main application state for the posts surface.
pub struct App {
    /// Refresh settings this surface was created with.
    pub refresh: RefreshConfig,
    /// Whether the surface is live in an interactive terminal.
    pub mounted: bool,
    /// Highlighted row in the posts list.
    pub cursor: PostCursor,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Present only while mounted with auto-refresh enabled.
    timer: Option<RefreshTimer>,
}

impl App {
    pub fn new(refresh: RefreshConfig) -> Self {
        Self {
            refresh,
            mounted: false,
            cursor: PostCursor::new(),
            show_help: false,
            should_quit: false,
            timer: None,
        }
    }

    /// Main event loop.
    ///
    /// The first frame is drawn unmounted (blank); mounting happens once the
    /// terminal is known to be live.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        ctx: &mut StoreContext,
    ) -> io::Result<()> {
        terminal.draw(|frame| ui::draw(frame, self, ctx.state()))?;
        self.mount(ctx, Instant::now());

        while !self.should_quit {
            self.tick(ctx, Instant::now());
            terminal.draw(|frame| ui::draw(frame, self, ctx.state()))?;
            self.handle_events(ctx)?;
        }

        self.unmount();
        Ok(())
    }

    /// Trigger the initial load and start the refresh timer.
    pub fn mount(&mut self, ctx: &mut StoreContext, now: Instant) {
        self.mounted = true;
        ctx.load();

        if self.refresh.auto_refresh {
            log::info!("Auto-refresh every {}s", self.refresh.interval.as_secs());
            self.timer = Some(RefreshTimer::start(self.refresh.interval, now));
        }
        self.sync_cursor(ctx.state());
    }

    /// Cancel the refresh timer. In-flight fetches keep running.
    pub fn unmount(&mut self) {
        self.timer = None;
        self.mounted = false;
    }

    /// Apply finished fetches and fire the refresh timer if it is due.
    pub fn tick(&mut self, ctx: &mut StoreContext, now: Instant) {
        ctx.drain();

        if let Some(timer) = self.timer.as_mut() {
            if timer.poll(now) {
                log::info!("Auto-refreshing posts...");
                ctx.invalidate();
            }
        }
        self.sync_cursor(ctx.state());
    }

    /// Time until the next automatic refresh, if one is scheduled.
    pub fn next_refresh_in(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|timer| timer.remaining(now))
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self, ctx: &mut StoreContext) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, ctx);
                }
            }
        }
        Ok(())
    }

    /// Map a key press to a surface or store action.
    pub fn handle_key(&mut self, code: KeyCode, ctx: &mut StoreContext) {
        if self.show_help {
            match code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let len = ctx.state().posts.len();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => ctx.invalidate(),
            KeyCode::Char('C') => {
                log::info!("Clearing cached posts");
                ctx.reset();
                self.cursor.select(None);
                ctx.load();
            }
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_prev(len),
            KeyCode::Home | KeyCode::Char('g') => self.cursor.select((len > 0).then_some(0)),
            KeyCode::End | KeyCode::Char('G') => self.cursor.select(len.checked_sub(1)),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_under_cursor(ctx),
            KeyCode::Esc => ctx.select_post(None),
            _ => {}
        }
    }

    /// Select the highlighted post, only while the list is actually visible.
    fn select_under_cursor(&mut self, ctx: &mut StoreContext) {
        if !matches!(View::of(self.mounted, ctx.state()), View::Content) {
            return;
        }
        let post = self
            .cursor
            .selected()
            .and_then(|i| ctx.state().posts.get(i))
            .cloned();
        if let Some(post) = post {
            ctx.select_post(Some(post));
        }
    }

    fn sync_cursor(&mut self, state: &PostState) {
        if self.cursor.selected().is_none() {
            self.cursor.select(state.selected_index());
        }
        self.cursor.clamp(state.posts.len());
    }
}
