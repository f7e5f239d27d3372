//! # UI Layout
//!
//! Composes the frame: a one-line status bar on top, the sidebar on the
//! left, and the content area on the right. The content area dispatches on
//! the selected item's render mode and the payload's fetch state.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Glimpse | status message                     │
//! ├──────────────┬───────────────────────────────┤
//! │ Navigation   │ Content                       │
//! │  (30%)       │  (70%)                        │
//! │              │  table / chart / text /       │
//! │              │  welcome / loading / error    │
//! └──────────────┴───────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::parse_records;
use crate::core::dispatch::{RenderMode, render_mode};
use crate::core::state::{App, FetchState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::Placeholder;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let (title_area, sidebar_area, content_area) = compute_layout(frame.area());

    render_title(frame, title_area, app);
    tui.sidebar.render(frame, sidebar_area, &app.menu, app.selected);
    render_content(frame, content_area, app, tui);
}

/// Splits the frame into title bar, sidebar, and content. Kept as a pure
/// function so mouse hit testing can recompute the same regions.
fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(area);
    let [sidebar_area, content_area] =
        Layout::horizontal([Percentage(30), Percentage(70)]).areas(body_area);
    (title_area, sidebar_area, content_area)
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Glimpse ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let Some(item) = app.selected_item() else {
        Placeholder::Welcome.render(frame, area);
        return;
    };

    match &app.content {
        FetchState::Idle | FetchState::Pending => {
            Placeholder::Loading {
                label: item.label.clone(),
            }
            .render(frame, area);
        }
        FetchState::Error(message) => {
            Placeholder::Error {
                message: message.clone(),
            }
            .render(frame, area);
        }
        FetchState::Ready(payload) => match render_mode(&item.kind()) {
            // A payload that doesn't parse as records renders the same as
            // an empty series: the view's no-data state, never an error.
            RenderMode::Table => {
                let records = parse_records(payload).unwrap_or_default();
                tui.table.render(frame, area, &records);
            }
            RenderMode::Chart => {
                let records = parse_records(payload).unwrap_or_default();
                tui.chart.render(frame, area, &records);
            }
            RenderMode::Text => tui.text.render(frame, area, payload),
        },
    }
}

/// Maps a mouse position to a sidebar menu index, if it lands on one.
/// Recomputes the layout from the frame area, so the result always matches
/// what the last draw put on screen.
pub fn hit_test_sidebar(column: u16, row: u16, frame_area: Rect) -> Option<usize> {
    let (_, sidebar_area, _) = compute_layout(frame_area);

    // Exclude the block's border on all four sides.
    let inner = Rect {
        x: sidebar_area.x + 1,
        y: sidebar_area.y + 1,
        width: sidebar_area.width.saturating_sub(2),
        height: sidebar_area.height.saturating_sub(2),
    };
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }
    Some((row - inner.y) as usize)
}
