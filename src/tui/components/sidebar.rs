//! # Sidebar Component
//!
//! The navigation menu: one row per menu item, a movable cursor, and a
//! marker for the item whose view is currently displayed. Also owns the
//! menu's loading and error presentations, which are distinct from
//! per-view content errors.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};

use crate::api::{MenuItem, ViewKind};
use crate::core::state::FetchState;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events the sidebar emits to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The user activated the item at this menu index.
    Activate(usize),
}

pub struct SidebarState {
    /// Cursor position (keyboard highlight), not the active selection.
    pub cursor: usize,
    list_state: ListState,
    /// Item count from the last render, used to clamp cursor movement.
    item_count: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            list_state: ListState::default(),
            item_count: 0,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        menu: &FetchState<Vec<MenuItem>>,
        active: Option<usize>,
    ) {
        let block = Block::bordered().title("Navigation");

        match menu {
            FetchState::Idle | FetchState::Pending => {
                let loading = Paragraph::new("Loading menu items...")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(loading, area);
            }
            FetchState::Error(message) => {
                let text = format!("Menu unavailable:\n{message}\n\nPress r to retry.");
                let error = Paragraph::new(text)
                    .block(block.title_style(Style::default().fg(Color::Red)))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true });
                frame.render_widget(error, area);
            }
            FetchState::Ready(items) if items.is_empty() => {
                let empty = Paragraph::new("No menu items available")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(empty, area);
            }
            FetchState::Ready(items) => {
                self.item_count = items.len();
                self.cursor = self.cursor.min(items.len() - 1);

                let rows: Vec<ListItem> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_active = active == Some(index);
                        let style = if is_active {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                        };
                        let line = Line::from(vec![
                            Span::raw(format!("{} ", kind_marker(&item.kind()))),
                            Span::styled(item.label.clone(), style),
                        ]);
                        ListItem::new(line)
                    })
                    .collect();

                self.list_state.select(Some(self.cursor));
                let list = List::new(rows)
                    .block(block)
                    .highlight_style(Style::default().bg(Color::DarkGray))
                    .highlight_symbol("> ");
                frame.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.cursor + 1 < self.item_count {
                    self.cursor += 1;
                }
                None
            }
            TuiEvent::Submit if self.item_count > 0 => Some(SidebarEvent::Activate(self.cursor)),
            _ => None,
        }
    }
}

fn kind_marker(kind: &ViewKind) -> &'static str {
    match kind {
        ViewKind::Table => "▤",
        ViewKind::Chart => "▮",
        ViewKind::About => "ℹ",
        ViewKind::Other => "·",
    }
}
