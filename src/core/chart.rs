//! Bar-chart engine math: windowing, scales, color ramp, labels.
//!
//! Everything here is pure and unit-testable; the ratatui drawing lives in
//! `tui::components::chart_view`. Coordinates are terminal cells (`u16`),
//! colors are plain RGB triples so this module stays free of UI types.
//!
//! The windowing rule is positional on purpose: the chart shows the *last
//! ten records in input order*, not the ten largest years. The source data
//! is "most recent last" by convention but not guaranteed sorted, and this
//! recency heuristic is preserved exactly rather than corrected to a sort.

use crate::api::DataRecord;

/// Maximum number of records the chart displays.
pub const WINDOW_LEN: usize = 10;

/// Fraction of each band's pitch left as padding (split evenly on both
/// sides of the bar).
const BAND_PADDING_FRAC: f64 = 0.2;

/// The trailing slice of at most [`WINDOW_LEN`] records, input order kept.
pub fn window(records: &[DataRecord]) -> &[DataRecord] {
    let start = records.len().saturating_sub(WINDOW_LEN);
    &records[start..]
}

/// Categorical positional axis: one equal-width slot per windowed record.
///
/// The domain is positional (index 0..count), so duplicate years each get
/// their own band.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    count: usize,
    range: u16,
}

impl BandScale {
    pub fn new(count: usize, range: u16) -> Self {
        Self { count, range }
    }

    fn pitch(&self) -> f64 {
        f64::from(self.range) / self.count as f64
    }

    /// The (offset, width) of the band at `index`, in cells from the left
    /// edge of the plot. `None` when the index is out of domain or the
    /// plot is too narrow to give every band a cell.
    pub fn slot(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.count || self.range == 0 {
            return None;
        }
        let pitch = self.pitch();
        if pitch < 1.0 {
            return None;
        }
        let pad = pitch * BAND_PADDING_FRAC / 2.0;
        let left = index as f64 * pitch + pad;
        let right = (index + 1) as f64 * pitch - pad;
        let offset = left.round() as u16;
        let width = ((right.round() as u16).saturating_sub(offset)).max(1);
        Some((offset, width))
    }
}

/// Linear value axis from 0 to the window's maximum, mapped onto a cell
/// height. Rescales per window: records outside the window never widen the
/// domain.
#[derive(Debug, Clone, Copy)]
pub struct ValueScale {
    max: u64,
    range: u16,
}

impl ValueScale {
    /// Domain upper bound taken from the windowed records only.
    pub fn from_window(records: &[DataRecord], range: u16) -> Self {
        let max = records.iter().map(|r| r.population).max().unwrap_or(0);
        Self { max, range }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Bar height in cells. A value of 0 (or an all-zero window) maps to a
    /// zero-height bar, not an omitted one.
    pub fn height_for(&self, value: u64) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let scaled = value as f64 / self.max as f64 * f64::from(self.range);
        (scaled.round() as u16).min(self.range)
    }
}

// Endpoints of the sequential blues ramp (light → dark).
const RAMP_LIGHT: (u8, u8, u8) = (198, 219, 239);
const RAMP_DARK: (u8, u8, u8) = (8, 81, 156);

/// Sequential color for the bar at `index` of a window of `count` bars.
///
/// The ramp is indexed by window position only - it encodes recency, never
/// magnitude. Changing a bar's value must not change its color.
pub fn color_for(index: usize, count: usize) -> (u8, u8, u8) {
    if count == 0 {
        return RAMP_LIGHT;
    }
    let t = index as f64 / count as f64;
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (
        lerp(RAMP_LIGHT.0, RAMP_DARK.0),
        lerp(RAMP_LIGHT.1, RAMP_DARK.1),
        lerp(RAMP_LIGHT.2, RAMP_DARK.2),
    )
}

/// Value label shown above a bar: millions to one decimal, "M" suffix.
pub fn millions_label(population: u64) -> String {
    format!("{:.1}M", population as f64 / 1_000_000.0)
}
