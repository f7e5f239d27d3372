//! # Placeholder Component
//!
//! Fills the content area when no view can be rendered: the welcome screen
//! before any selection, the loading state while a fetch is in flight, and
//! the per-view error state with its retry hint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub enum Placeholder {
    Welcome,
    Loading { label: String },
    Error { message: String },
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Placeholder::Welcome => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Welcome to the Dashboard",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from("Select an item from the sidebar to view its content."),
                    Line::from(Span::styled(
                        format!("glimpse v{}", env!("CARGO_PKG_VERSION")),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
                    .flex(Flex::Center)
                    .areas(area);
                frame.render_widget(
                    Paragraph::new(lines).alignment(Alignment::Center),
                    centered,
                );
            }
            Placeholder::Loading { label } => {
                let loading = Paragraph::new(format!("Loading {label}..."))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                let [centered] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(area);
                frame.render_widget(loading, centered);
            }
            Placeholder::Error { message } => {
                let text = format!("{message}\n\nPress r to retry.");
                let error = Paragraph::new(text)
                    .block(Block::bordered().title("ERROR"))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true });
                frame.render_widget(error, area);
            }
        }
    }
}
