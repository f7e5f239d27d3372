//! # Table Component
//!
//! Renders the full record series (no windowing) as a scrollable table
//! with a summary footer: record count, latest year, earliest year.
//! Populations carry locale thousands separators.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Row, Table, TableState};

use crate::api::DataRecord;
use crate::tui::component::EventHandler;
use crate::tui::components::thousands;
use crate::tui::event::TuiEvent;

/// Summary statistics over the whole series (not the chart window).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableSummary {
    count: usize,
    latest_year: i32,
    earliest_year: i32,
}

fn summarize(records: &[DataRecord]) -> Option<TableSummary> {
    let latest_year = records.iter().map(|r| r.year).max()?;
    let earliest_year = records.iter().map(|r| r.year).min()?;
    Some(TableSummary {
        count: records.len(),
        latest_year,
        earliest_year,
    })
}

pub struct TableViewState {
    table_state: TableState,
    row_count: usize,
}

impl TableViewState {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            row_count: 0,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, records: &[DataRecord]) {
        let block = Block::bordered().title("Population Data");

        if records.is_empty() {
            let no_data = Paragraph::new("No data available to display in table format.")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(no_data, area);
            return;
        }
        self.row_count = records.len();

        use Constraint::{Length, Min};
        let [table_area, summary_area] = Layout::vertical([Min(1), Length(1)]).areas(area);

        let rows: Vec<Row> = records
            .iter()
            .map(|record| {
                Row::new(vec![record.year.to_string(), thousands(record.population)])
            })
            .collect();

        let table = Table::new(rows, [Length(6), Min(12)])
            .header(
                Row::new(vec!["Year", "Population"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(table, table_area, &mut self.table_state);

        // Summary line mirrors the on-screen stats of the original view.
        if let Some(summary) = summarize(records) {
            let text = format!(
                "Records: {} | Latest year: {} | Earliest year: {}",
                summary.count, summary.latest_year, summary.earliest_year
            );
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
                summary_area,
            );
        }
    }
}

impl EventHandler for TableViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        if self.row_count == 0 {
            return None;
        }
        let last = self.row_count - 1;
        let selected = self.table_state.selected();
        match event {
            TuiEvent::ScrollUp => {
                let next = selected.map_or(0, |i| i.saturating_sub(1));
                self.table_state.select(Some(next));
            }
            TuiEvent::ScrollDown => {
                let next = selected.map_or(0, |i| (i + 1).min(last));
                self.table_state.select(Some(next));
            }
            TuiEvent::ScrollPageUp => {
                let next = selected.map_or(0, |i| i.saturating_sub(10));
                self.table_state.select(Some(next));
            }
            TuiEvent::ScrollPageDown => {
                let next = selected.map_or(0, |i| (i + 10).min(last));
                self.table_state.select(Some(next));
            }
            _ => return None,
        }
        None
    }
}
