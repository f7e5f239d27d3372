//! # Chart Component
//!
//! Bar-chart presentation over the pure math in `core::chart`: lays the
//! windowed records out as color-graded bars with value labels and a year
//! axis, and owns the hover/tooltip interaction.
//!
//! The tooltip is deliberately owned by this component's state - it is
//! created on hover, dropped on leave, and can never outlive the chart or
//! exist twice.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::api::DataRecord;
use crate::core::chart::{BandScale, ValueScale, WINDOW_LEN, color_for, millions_label, window};
use crate::tui::components::thousands;

/// Ephemeral hover state: which bar, and where the pointer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hover {
    index: usize,
    column: u16,
    row: u16,
}

pub struct ChartViewState {
    /// Screen-space rects of the rendered bars, cached for hit testing.
    bar_areas: Vec<Rect>,
    hover: Option<Hover>,
}

impl ChartViewState {
    pub fn new() -> Self {
        Self {
            bar_areas: Vec::new(),
            hover: None,
        }
    }

    /// Pointer moved: hovering a bar emphasizes it and arms the tooltip;
    /// anywhere else clears both.
    pub fn update_hover(&mut self, column: u16, row: u16) {
        self.hover = self
            .bar_areas
            .iter()
            .position(|bar| bar.contains(Position { x: column, y: row }))
            .map(|index| Hover { index, column, row });
    }

    pub fn clear(&mut self) {
        self.bar_areas.clear();
        self.hover = None;
    }

    #[cfg(test)]
    fn hovered_index(&self) -> Option<usize> {
        self.hover.map(|h| h.index)
    }

    #[cfg(test)]
    fn bar_count(&self) -> usize {
        self.bar_areas.len()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, records: &[DataRecord]) {
        self.bar_areas.clear();

        let block =
            Block::bordered().title(format!("Population Trend (Last {WINDOW_LEN} Records)"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if records.is_empty() {
            self.hover = None;
            let no_data = Paragraph::new("No data available to display in chart format.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(no_data, inner);
            return;
        }

        let windowed = window(records);
        if self.hover.is_some_and(|h| h.index >= windowed.len()) {
            self.hover = None;
        }

        use Constraint::{Length, Min};
        let [plot_row, year_axis, caption] =
            Layout::vertical([Min(1), Length(1), Length(1)]).areas(inner);

        let values = ValueScale::from_window(windowed, plot_row.height.saturating_sub(1));
        let gutter_width = (thousands(values.max()).chars().count() as u16 + 1)
            .min(plot_row.width / 3);
        let [gutter, plot] =
            Layout::horizontal([Length(gutter_width), Min(1)]).areas(plot_row);
        let bands = BandScale::new(windowed.len(), plot.width);

        render_value_axis(frame, gutter, values.max());
        frame.render_widget(
            Paragraph::new("Year").alignment(Alignment::Center),
            caption,
        );

        for (index, record) in windowed.iter().enumerate() {
            let Some((offset, width)) = bands.slot(index) else {
                // Plot too narrow for this window; geometry stays empty.
                self.bar_areas.clear();
                break;
            };
            let height = values.height_for(record.population);
            let bar = Rect {
                x: plot.x + offset,
                y: plot.y + plot.height - height,
                width,
                height,
            };
            // Zero-height bars keep their slot in the geometry so hover
            // indexes stay aligned with window positions.
            self.bar_areas.push(bar);

            if height > 0 {
                let (r, g, b) = color_for(index, windowed.len());
                frame.render_widget(
                    Block::new().style(Style::default().bg(Color::Rgb(r, g, b))),
                    bar,
                );
                if self.hover.map(|h| h.index) == Some(index) {
                    let emphasis = Block::bordered().border_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    );
                    frame.render_widget(emphasis, bar);
                }
            }

            // Centered value label one row above the bar top.
            let label_area = Rect {
                x: plot.x + offset,
                y: bar.y.saturating_sub(1),
                width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(millions_label(record.population)).alignment(Alignment::Center),
                label_area,
            );

            let year_area = Rect {
                x: plot.x + offset,
                y: year_axis.y,
                width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(record.year.to_string()).alignment(Alignment::Center),
                year_area,
            );
        }

        if let Some(hover) = self.hover
            && let Some(record) = windowed.get(hover.index)
        {
            render_tooltip(frame, hover, record);
        }
    }
}

fn render_value_axis(frame: &mut Frame, gutter: Rect, max: u64) {
    if gutter.height == 0 || gutter.width == 0 {
        return;
    }
    let top = Rect { height: 1, ..gutter };
    frame.render_widget(
        Paragraph::new(thousands(max)).alignment(Alignment::Right),
        top,
    );
    let bottom = Rect {
        y: gutter.y + gutter.height - 1,
        height: 1,
        ..gutter
    };
    frame.render_widget(Paragraph::new("0").alignment(Alignment::Right), bottom);
}

/// Draws the single transient tooltip near the pointer, clamped to the
/// frame so it never renders off-screen.
fn render_tooltip(frame: &mut Frame, hover: Hover, record: &DataRecord) {
    let lines = vec![
        Line::from(format!("Year: {}", record.year)),
        Line::from(format!("Population: {}", thousands(record.population))),
    ];
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 2;
    let height = 4u16;

    let screen = frame.area();
    if screen.width < width || screen.height < height {
        return;
    }
    let x = (hover.column + 2).min(screen.width - width);
    let y = hover.row.saturating_sub(1).min(screen.height - height);
    let tooltip_area = Rect {
        x,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, tooltip_area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered()),
        tooltip_area,
    );
}
