//! Chart.js-compatible JSON output.
//!
//! Describes the two-series valuation chart (swap value solid, delta
//! dashed) with the fixed dark theme, as a chart.js `line` document that a
//! web page can render directly.

use std::path::Path;

use serde::Serialize;

use abs_pricing::ValuationResult;

use crate::Result;

/// Swap value series colour.
pub const SWAP_VALUE_COLOR: &str = "#FF6B6B";
/// Delta series colour.
pub const DELTA_COLOR: &str = "#4ECDC4";
/// Chart background colour.
pub const BACKGROUND_COLOR: &str = "rgb(40, 40, 40)";
/// Title, axis, and tick text colour.
pub const TEXT_COLOR: &str = "white";
/// Grid line colour.
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
/// Font family used throughout the chart.
pub const FONT_FAMILY: &str = "Arial";

const CHART_TITLE: &str = "ABS Derivative Pricing & Sensitivity";
const X_AXIS_TITLE: &str = "Time (Years)";
const Y_AXIS_TITLE: &str = "Value / Delta";

/// Chart.js font description
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsFont {
    /// Font family
    pub family: String,
    /// Font size in points
    pub size: u32,
}

/// Chart.js dataset structure
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    /// Dataset label
    pub label: String,
    /// Data values
    pub data: Vec<f64>,
    /// Line colour
    pub border_color: String,
    /// Line width in pixels
    pub border_width: f64,
    /// Dash pattern; empty means a solid line
    pub border_dash: Vec<f64>,
    /// Area fill toggle
    pub fill: bool,
}

/// Chart.js data structure
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    /// X-axis labels
    pub labels: Vec<String>,
    /// Datasets
    pub datasets: Vec<ChartJsDataset>,
}

/// Chart.js title options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitleOptions {
    /// Title display flag
    pub display: bool,
    /// Title text
    pub text: String,
    /// Title colour
    pub color: String,
    /// Title font
    pub font: ChartJsFont,
}

/// Chart.js tick options
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsTickOptions {
    /// Tick label colour
    pub color: String,
    /// Maximum label rotation in degrees
    pub max_rotation: f64,
    /// Minimum label rotation in degrees
    pub min_rotation: f64,
}

/// Chart.js grid options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsGridOptions {
    /// Grid line colour
    pub color: String,
}

/// Chart.js axis options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsAxisOptions {
    /// Axis title
    pub title: ChartJsTitleOptions,
    /// Tick styling
    pub ticks: ChartJsTickOptions,
    /// Grid styling
    pub grid: ChartJsGridOptions,
}

/// Chart.js axes
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsScales {
    /// X axis
    pub x: ChartJsAxisOptions,
    /// Y axis
    pub y: ChartJsAxisOptions,
}

/// Chart.js options
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsOptions {
    /// Chart title
    pub title: ChartJsTitleOptions,
    /// Axis configuration
    pub scales: ChartJsScales,
    /// Chart background colour
    pub background_color: String,
}

/// Chart.js-compatible line chart document
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsLineChart {
    /// Chart type (always "line")
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartJsData,
    /// Chart options
    pub options: ChartJsOptions,
}

fn title(text: &str, size: u32) -> ChartJsTitleOptions {
    ChartJsTitleOptions {
        display: true,
        text: text.to_string(),
        color: TEXT_COLOR.to_string(),
        font: ChartJsFont {
            family: FONT_FAMILY.to_string(),
            size,
        },
    }
}

fn axis(text: &str, rotation: f64) -> ChartJsAxisOptions {
    ChartJsAxisOptions {
        title: title(text, 14),
        ticks: ChartJsTickOptions {
            color: TEXT_COLOR.to_string(),
            max_rotation: rotation,
            min_rotation: rotation,
        },
        grid: ChartJsGridOptions {
            color: GRID_COLOR.to_string(),
        },
    }
}

/// Build the chart document for one valuation result
pub fn line_chart(result: &ValuationResult) -> ChartJsLineChart {
    let labels = result
        .points()
        .iter()
        .map(|p| format!("{:.2}", p.time))
        .collect();

    ChartJsLineChart {
        chart_type: "line".to_string(),
        data: ChartJsData {
            labels,
            datasets: vec![
                ChartJsDataset {
                    label: "Swap Value".to_string(),
                    data: result.swap_values(),
                    border_color: SWAP_VALUE_COLOR.to_string(),
                    border_width: 2.0,
                    border_dash: Vec::new(),
                    fill: false,
                },
                ChartJsDataset {
                    label: "Delta (Forecast)".to_string(),
                    data: result.deltas(),
                    border_color: DELTA_COLOR.to_string(),
                    border_width: 2.0,
                    border_dash: vec![6.0, 4.0],
                    fill: false,
                },
            ],
        },
        options: ChartJsOptions {
            title: title(CHART_TITLE, 16),
            scales: ChartJsScales {
                x: axis(X_AXIS_TITLE, 45.0),
                y: axis(Y_AXIS_TITLE, 0.0),
            },
            background_color: BACKGROUND_COLOR.to_string(),
        },
    }
}

/// Render the chart document as pretty-printed JSON
pub fn to_json_string(chart: &ChartJsLineChart) -> Result<String> {
    Ok(serde_json::to_string_pretty(chart)?)
}

/// Write the chart document to a file, overwriting any previous run
pub fn write_json(chart: &ChartJsLineChart, path: &Path) -> Result<()> {
    let json = to_json_string(chart)?;
    std::fs::write(path, json)?;
    Ok(())
}
