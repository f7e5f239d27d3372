//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! intention is that a different adapter (web, plain HTTP dump) could sit
//! on top of `core` without touching it.
//!
//! ## Event loop shape
//!
//! One iteration: draw if something changed, poll the terminal briefly,
//! drain all pending input, then drain completed background fetches from
//! the action channel. Background fetches run as tokio tasks and report
//! back over a std mpsc channel, so the loop itself stays synchronous.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{DataSource, HttpDataSource, MenuItem};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dispatch::{RenderMode, render_mode};
use crate::core::state::{App, FetchState};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChartViewState, SidebarEvent, SidebarState, TableViewState, TextViewState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub sidebar: SidebarState,
    pub table: TableViewState,
    pub chart: ChartViewState,
    pub text: TextViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::new(),
            table: TableViewState::new(),
            chart: ChartViewState::new(),
            text: TextViewState::new(),
        }
    }

    /// Scroll offsets, row selection, and hover belong to the view they
    /// were made in; a new selection starts fresh.
    fn reset_views(&mut self) {
        self.table = TableViewState::new();
        self.chart.clear();
        self.text = TextViewState::new();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture drives bar hover and sidebar clicks.
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::new(config.base_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // App::new starts with the menu Pending; kick off the matching fetch.
    spawn_menu_fetch(source.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit | TuiEvent::Quit => {
                    should_quit |= dispatch(&mut app, &mut tui, Action::Quit, &source, &tx);
                }
                TuiEvent::Escape => {
                    should_quit |= dispatch(&mut app, &mut tui, Action::Select(None), &source, &tx);
                }
                TuiEvent::Retry => {
                    let action = if matches!(app.menu, FetchState::Error(_)) {
                        Action::RetryMenu
                    } else {
                        Action::RetryContent
                    };
                    should_quit |= dispatch(&mut app, &mut tui, action, &source, &tx);
                }

                // Cursor movement and Enter belong to the sidebar.
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
                    if let Some(SidebarEvent::Activate(index)) =
                        tui.sidebar.handle_event(&tui_event)
                    {
                        should_quit |= dispatch(
                            &mut app,
                            &mut tui,
                            Action::Select(Some(index)),
                            &source,
                            &tx,
                        );
                    }
                }

                // Scroll goes to whichever view is on screen.
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    match app.selected_item().map(|item| render_mode(&item.kind())) {
                        Some(RenderMode::Table) => {
                            tui.table.handle_event(&tui_event);
                        }
                        Some(RenderMode::Text) => {
                            tui.text.handle_event(&tui_event);
                        }
                        // The chart shows a fixed window; nothing to scroll.
                        Some(RenderMode::Chart) | None => {}
                    }
                }

                TuiEvent::MouseMove(column, row) => {
                    // Bar geometry is cached in screen space, so this is a
                    // no-op unless a chart was drawn last frame.
                    tui.chart.update_hover(column, row);
                }
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    if let Some(index) = ui::hit_test_sidebar(column, row, frame_area) {
                        should_quit |= dispatch(
                            &mut app,
                            &mut tui,
                            Action::Select(Some(index)),
                            &source,
                            &tx,
                        );
                    }
                }
            }
        }

        // Handle completed background fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {action:?}");
            should_quit |= dispatch(&mut app, &mut tui, action, &source, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one action through the core reducer and performs the resulting
/// I/O. Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    source: &Arc<dyn DataSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let selected_before = app.selected;
    let effect = update(app, action);
    if app.selected != selected_before {
        tui.reset_views();
    }
    match effect {
        Effect::None => false,
        Effect::FetchMenu => {
            spawn_menu_fetch(source.clone(), tx.clone());
            false
        }
        Effect::FetchContent { token, item } => {
            spawn_content_fetch(source.clone(), token, item, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_menu_fetch(source: Arc<dyn DataSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning menu fetch");
    tokio::spawn(async move {
        let result = source.fetch_menu().await.map_err(|e| e.to_string());
        if tx.send(Action::MenuLoaded(result)).is_err() {
            warn!("Failed to send menu result: receiver dropped");
        }
    });
}

fn spawn_content_fetch(
    source: Arc<dyn DataSource>,
    token: u64,
    item: MenuItem,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning content fetch for '{}' (token {token})",
        item.name
    );
    tokio::spawn(async move {
        let result = source
            .fetch_resource(&item.resource_key())
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::ContentLoaded { token, result }).is_err() {
            warn!("Failed to send content result for token {token}: receiver dropped");
        }
    });
}
