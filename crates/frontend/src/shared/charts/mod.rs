//! Chart widgets: engine-independent chart descriptions plus the registry
//! that owns the live instances.
//!
//! A chart is described as plain data (`ChartSpec`) and handed to a
//! `ChartBackend` for drawing. The real backend binds the page's global
//! Chart.js engine; tests substitute a counting fake.

pub mod chartjs;
pub mod registry;

pub use chartjs::ChartJsBackend;
pub use registry::{ChartBackend, ChartRegistry};

use serde_json::{json, Value};

/// Chart.js chart type used by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// One value series of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Series name shown in the legend and tooltips; `None` for pie slices
    pub label: Option<String>,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn labeled(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            values,
        }
    }

    pub fn bare(values: Vec<f64>) -> Self {
        Self {
            label: None,
            values,
        }
    }
}

/// Engine-independent description of one chart widget.
///
/// The per-slot-type options are fixed by the constructors: single bars hide
/// the legend, comparison bars show it, pies keep the engine defaults. The
/// value axis of bar charts is tagged for locale grouping; the backend
/// attaches the actual tick formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// `Some(bool)` forces legend visibility, `None` leaves the engine default
    pub legend: Option<bool>,
    /// Format value-axis ticks with thousands grouping
    pub grouped_value_axis: bool,
}

impl ChartSpec {
    /// Single-series bar chart: legend hidden, grouped value axis.
    pub fn bar(labels: Vec<String>, dataset: Dataset) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets: vec![dataset],
            legend: Some(false),
            grouped_value_axis: true,
        }
    }

    /// Pie chart with engine-default legend and axis behavior.
    pub fn pie(labels: Vec<String>, dataset: Dataset) -> Self {
        Self {
            kind: ChartKind::Pie,
            labels,
            datasets: vec![dataset],
            legend: None,
            grouped_value_axis: false,
        }
    }

    /// Multi-series bar chart: legend shown so the series can be told apart,
    /// grouped value axis.
    pub fn grouped_bar(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets,
            legend: Some(true),
            grouped_value_axis: true,
        }
    }

    /// Build the Chart.js configuration tree.
    ///
    /// The grouped value axis is emitted as an empty `ticks` object; the
    /// callback is a JS function and has to be attached by the backend.
    pub fn to_config(&self) -> Value {
        let datasets: Vec<Value> = self
            .datasets
            .iter()
            .map(|dataset| {
                let mut entry = json!({ "data": dataset.values });
                if let Some(label) = &dataset.label {
                    entry["label"] = json!(label);
                }
                entry
            })
            .collect();

        let mut options = json!({ "responsive": true });
        if let Some(display) = self.legend {
            options["plugins"] = json!({ "legend": { "display": display } });
        }
        if self.grouped_value_axis {
            options["scales"] = json!({ "y": { "ticks": {} } });
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": options,
        })
    }
}
