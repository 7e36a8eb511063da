//! Chart Model
//!
//! Turns a repository's history into a drawable time-series chart: one
//! category per history point on the x-axis, three overlaid line series,
//! and an auto-fitted y-axis. Every point is plotted; nothing is resampled.

use chrono::{Datelike, NaiveDate};

use crate::models::HistoryPoint;

/// Height of the chart area in pixels
pub const CHART_HEIGHT: f64 = 400.0;

/// Number of horizontal grid lines the y-axis aims for
pub const Y_TICK_TARGET: usize = 5;

/// The three plotted counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Stars,
    Forks,
    Watchers,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Stars, SeriesKind::Forks, SeriesKind::Watchers];

    /// Legend entry
    pub fn name(&self) -> &'static str {
        match self {
            SeriesKind::Stars => "Stars",
            SeriesKind::Forks => "Forks",
            SeriesKind::Watchers => "Watchers",
        }
    }

    /// Line color
    pub fn color(&self) -> &'static str {
        match self {
            SeriesKind::Stars => "#FFD700",
            SeriesKind::Forks => "#40E0D0",
            SeriesKind::Watchers => "#FF69B4",
        }
    }

    pub fn value(&self, point: &HistoryPoint) -> u64 {
        match self {
            SeriesKind::Stars => point.stars,
            SeriesKind::Forks => point.forks,
            SeriesKind::Watchers => point.watchers,
        }
    }
}

/// One line of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub values: Vec<u64>,
}

impl Series {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// Vertical scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl YAxis {
    /// Fit a zero-based scale with round tick steps around `values`
    pub fn fit(values: impl IntoIterator<Item = u64>, tick_target: usize) -> Self {
        let highest = values.into_iter().max().unwrap_or(0) as f64;
        let highest = if highest > 0.0 { highest } else { 1.0 };
        let intervals = tick_target.saturating_sub(1).max(1) as f64;

        let step = nice_step(highest / intervals).max(1.0);
        let max = (highest / step).ceil() * step;

        Self { min: 0.0, max, step }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Tick values from bottom to top
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.span() / self.step).round() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Round a raw step up to 1, 2, 5 or 10 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Default date label: `M/D/YYYY`
pub fn default_date_label(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Everything needed to draw the statistics history
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// One x-axis label per history point
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis: YAxis,
}

/// Values under the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip<'a> {
    pub label: &'a str,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub name: &'static str,
    pub color: &'static str,
    pub value: u64,
}

impl ChartModel {
    pub fn from_history(history: &[HistoryPoint]) -> Self {
        Self::from_history_with(history, default_date_label)
    }

    /// Build with a custom date formatter (e.g. the browser locale).
    ///
    /// Dates that cannot be parsed keep their raw text as the label.
    pub fn from_history_with<F>(history: &[HistoryPoint], format_date: F) -> Self
    where
        F: Fn(NaiveDate) -> String,
    {
        let labels = history
            .iter()
            .map(|point| match point.calendar_date() {
                Some(date) => format_date(date),
                None => point.date.clone(),
            })
            .collect();

        let series: Vec<Series> = SeriesKind::ALL
            .iter()
            .map(|kind| Series {
                kind: *kind,
                values: history.iter().map(|point| kind.value(point)).collect(),
            })
            .collect();

        let y_axis = YAxis::fit(
            series.iter().flat_map(|s| s.values.iter().copied()),
            Y_TICK_TARGET,
        );

        Self { labels, series, y_axis }
    }

    /// Number of points per series
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip<'_>> {
        let label = self.labels.get(index)?;
        let rows = self
            .series
            .iter()
            .filter_map(|s| {
                s.values.get(index).map(|value| TooltipRow {
                    name: s.name(),
                    color: s.color(),
                    value: *value,
                })
            })
            .collect();

        Some(Tooltip { label, rows })
    }
}

/// Space around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 5.0,
            right: 30.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

/// Pixel geometry of a chart drawn at a given width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    /// Layout for the available container width
    pub fn new(width: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: CHART_HEIGHT,
            margin: Margin::default(),
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Horizontal position of category `index` out of `count`
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margin.left + self.plot_width() / 2.0;
        }
        self.margin.left + index as f64 * self.plot_width() / (count - 1) as f64
    }

    /// Vertical position of `value` (canvas y grows downward)
    pub fn y_at(&self, value: f64, axis: &YAxis) -> f64 {
        let span = if axis.span() > 0.0 { axis.span() } else { 1.0 };
        self.margin.top + (axis.max - value) / span * self.plot_height()
    }

    /// Nearest category to a horizontal position
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        match count {
            0 => None,
            1 => Some(0),
            _ => {
                let plot_width = self.plot_width();
                if plot_width <= 0.0 {
                    return Some(0);
                }
                let fraction = ((x - self.margin.left) / plot_width).clamp(0.0, 1.0);
                Some((fraction * (count - 1) as f64).round() as usize)
            }
        }
    }

    /// Show every n-th x label so labels of `label_width` pixels don't overlap
    pub fn label_stride(&self, count: usize, label_width: f64) -> usize {
        if count <= 1 || label_width <= 0.0 {
            return 1;
        }
        let spacing = self.plot_width() / (count - 1) as f64;
        if spacing >= label_width {
            1
        } else {
            (label_width / spacing.max(1.0)).ceil() as usize
        }
    }
}
