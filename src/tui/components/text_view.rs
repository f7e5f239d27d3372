//! # Text Component
//!
//! The permissive end of dispatch: renders any payload as scrollable
//! paragraphs via `core::text` normalization, with a last-update header
//! (when the payload carries one) and a character/word/paragraph stats
//! footer. Empty paragraphs render as a single non-breaking space so the
//! original line structure never collapses.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use serde_json::Value;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::text::{TextDocument, normalize, paragraphs, stats};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Non-breaking space: an empty paragraph still occupies a line.
const EMPTY_PARAGRAPH: &str = "\u{00A0}";

/// Timestamp format the backend emits for `last_update`.
const BACKEND_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Upper bound on the scrollable body, in rows. Scroll offsets are `u16`,
/// so a pathologically long payload is truncated at this height instead of
/// overflowing the row arithmetic.
const MAX_BODY_HEIGHT: u16 = 10_000;

pub struct TextViewState {
    pub scroll_state: ScrollViewState,
}

impl TextViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, payload: &Value) {
        let document = normalize(payload);

        let block = Block::bordered().title("Text Content");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        use Constraint::{Length, Min};
        let header_height = if document.last_update.is_some() { 1 } else { 0 };
        let [header_area, body_area, footer_area] =
            Layout::vertical([Length(header_height), Min(1), Length(1)]).areas(inner);

        if let Some(raw) = &document.last_update {
            frame.render_widget(
                Paragraph::new(format!("Last updated: {}", display_timestamp(raw)))
                    .style(Style::default().fg(Color::DarkGray)),
                header_area,
            );
        }

        self.render_body(frame, body_area, &document);

        let counted = stats(&document.content);
        frame.render_widget(
            Paragraph::new(format!(
                "Characters: {} | Words: {} | Paragraphs: {}",
                counted.characters, counted.words, counted.paragraphs
            ))
            .style(Style::default().fg(Color::DarkGray)),
            footer_area,
        );
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, document: &TextDocument) {
        let content_width = area.width.saturating_sub(1);

        // Build one wrapped paragraph per source line and stack them.
        let rendered: Vec<(Paragraph, u16)> = paragraphs(&document.content)
            .iter()
            .map(|line| {
                let text = if line.is_empty() { EMPTY_PARAGRAPH } else { *line };
                let paragraph = Paragraph::new(text.to_string()).wrap(Wrap { trim: false });
                let height = paragraph
                    .line_count(content_width)
                    .max(1)
                    .min(MAX_BODY_HEIGHT as usize) as u16;
                (paragraph, height)
            })
            .collect();

        let total_height = rendered
            .iter()
            .fold(0u16, |acc, (_, height)| acc.saturating_add(*height))
            .min(MAX_BODY_HEIGHT);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in rendered {
            if y_offset >= total_height {
                break;
            }
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(paragraph, rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.scroll_state);
    }
}

impl EventHandler for TextViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        None
    }
}

/// Pretty-prints the backend timestamp when it matches the expected
/// format; anything else is shown verbatim.
fn display_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, BACKEND_TIMESTAMP) {
        Ok(parsed) => parsed.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
