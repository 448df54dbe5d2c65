//! Series shaping for the linear chart widget
//!
//! Produces Plotly-compatible data, layout and config values. The chart is
//! either fed by generated placeholder data or by samples pulled out of the
//! widget data store.

use chrono::DateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::WidgetsState;
use crate::widget::DataSource;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FAKE_POINTS: usize = 5;
const FAKE_MAX: i64 = 10;

/// Number of x axis ticks for a widget `width` grid units wide
pub fn tick_count(width: u32) -> u32 {
    match width {
        0..=3 => 6,
        4 => 8,
        5 => 12,
        _ => 15,
    }
}

/// X axis value: sample index for placeholder data, formatted time for live data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Index(u32),
    Time(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
    pub mode: String,
    pub marker: Marker,
}

impl Series {
    fn for_source(source: &DataSource, x: Vec<AxisValue>, y: Vec<f64>) -> Self {
        Self {
            name: source.label.clone(),
            x,
            y,
            mode: "lines+markers".to_string(),
            marker: Marker {
                color: source.color.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub ticklen: u32,
    pub tickangle: i32,
    pub nticks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub autosize: bool,
    pub margin: Margin,
    pub xaxis: XAxis,
}

impl ChartLayout {
    pub fn for_width(width: u32) -> Self {
        Self {
            autosize: true,
            margin: Margin {
                t: 30,
                r: 30,
                l: 30,
                b: 60,
            },
            xaxis: XAxis {
                ticklen: 0,
                tickangle: 40,
                nticks: tick_count(width),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub display_mode_bar: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: false,
        }
    }
}

/// Everything the chart library needs to draw a widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub data: Vec<Series>,
    pub layout: ChartLayout,
    pub config: ChartConfig,
}

/// Placeholder series: five random points per source
pub fn fake_series<R: Rng>(sources: &[DataSource], rng: &mut R) -> Vec<Series> {
    sources
        .iter()
        .map(|source| {
            let x = (1..=FAKE_POINTS as u32).map(AxisValue::Index).collect();
            let y = (0..FAKE_POINTS)
                .map(|_| rng.random_range(0..=FAKE_MAX) as f64)
                .collect();
            Series::for_source(source, x, y)
        })
        .collect()
}

/// Live series read from the widget data store.
///
/// Returns `None` while the widget's data is missing or still loading, or when
/// there are no sources; sources without a bound pin or samples are skipped.
pub fn live_series(
    widget_id: u64,
    sources: &[DataSource],
    widgets: &WidgetsState,
) -> Option<Vec<Series>> {
    if sources.is_empty() {
        return None;
    }
    let data = widgets.get(widget_id)?;
    if data.loading {
        return None;
    }

    let series = sources
        .iter()
        .filter_map(|source| {
            let stream = source.data_stream.as_ref().filter(|s| s.is_bound())?;
            let pin = data.pins.get(&stream.pin_key())?;
            let (x, y) = pin
                .data
                .iter()
                .map(|sample| (AxisValue::Time(format_timestamp(sample.x)), sample.y))
                .unzip();
            Some(Series::for_source(source, x, y))
        })
        .collect();
    Some(series)
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:mm:ss` in UTC
pub fn format_timestamp(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Render state of a chart widget
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    /// No live source configured; cached placeholder series
    FakeData { series: Vec<Series> },
    /// Bound to the widget data store
    LiveData,
}

/// Chart widget model: owns placeholder data across renders
#[derive(Debug, Clone)]
pub struct ChartWidget {
    widget_id: u64,
    width: u32,
    sources: Vec<DataSource>,
    state: ChartState,
}

impl ChartWidget {
    /// Mount a chart. Placeholder data is generated once here.
    pub fn mount<R: Rng>(
        widget_id: u64,
        width: u32,
        sources: Vec<DataSource>,
        fetch_real_data: bool,
        rng: &mut R,
    ) -> Self {
        let state = if fetch_real_data {
            ChartState::LiveData
        } else {
            ChartState::FakeData {
                series: fake_series(&sources, rng),
            }
        };
        Self {
            widget_id,
            width,
            sources,
            state,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Apply new props. Placeholder data is regenerated when the source list
    /// changed or no longer matches the cached series count.
    pub fn update_sources<R: Rng>(&mut self, sources: Vec<DataSource>, rng: &mut R) {
        let changed = sources != self.sources;
        self.sources = sources;
        if let ChartState::FakeData { series } = &mut self.state {
            if changed || series.len() != self.sources.len() {
                *series = fake_series(&self.sources, rng);
            }
        }
    }

    /// The chart to draw, or `None` when nothing should be rendered yet
    pub fn render(&self, widgets: &WidgetsState) -> Option<ChartSpec> {
        let data = match &self.state {
            ChartState::FakeData { series } => series.clone(),
            ChartState::LiveData => live_series(self.widget_id, &self.sources, widgets)?,
        };
        Some(ChartSpec {
            data,
            layout: ChartLayout::for_width(self.width),
            config: ChartConfig::default(),
        })
    }
}
