// src/chart/mod.rs
use std::path::Path as FsPath;

use svg::node::element::{path::Data, Circle, Line, Path, Text};
use svg::node::Text as TextNode;
use svg::Document;

use crate::extract::FinancialData;
use crate::utils::error::ChartError;

const CHART_WIDTH: f64 = 1000.0;
const CHART_HEIGHT: f64 = 700.0;
const MARGIN: f64 = 80.0;
const STROKE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 4.0;
const LINE_COLOR: &str = "blue";

/// Renders the revenue comparison line plot to an SVG file.
///
/// Refuses to plot when either sequence is empty: the caller reports
/// `InsufficientData` as "no data", not as a crash.
pub fn render_revenue_chart(data: &FinancialData, file: &FsPath) -> Result<(), ChartError> {
    if data.is_empty() {
        return Err(ChartError::InsufficientData);
    }

    let document = build_chart_document(data);
    svg::save(file, &document)?;

    tracing::info!(
        "Rendered revenue chart with {} points to {}",
        data.revenue.len(),
        file.display()
    );

    Ok(())
}

/// Builds the SVG document: one polyline through the revenue points, point
/// markers, axes, and the period labels along the category axis.
fn build_chart_document(data: &FinancialData) -> Document {
    let point_count = data.revenue.len();

    let (ymin, ymax) = data
        .revenue
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    // A flat series still needs a nonzero span to scale against.
    let yspan = if ymax > ymin { ymax - ymin } else { 1.0 };

    let resize_x = |i: usize| {
        if point_count > 1 {
            i as f64 / (point_count - 1) as f64 * CHART_WIDTH
        } else {
            CHART_WIDTH / 2.0
        }
    };
    let resize_y = |v: f64| (1.0 - (v - ymin) / yspan) * CHART_HEIGHT;

    let mut line_data = Data::new().move_to((resize_x(0), resize_y(data.revenue[0])));
    for (i, &value) in data.revenue.iter().enumerate().skip(1) {
        line_data = line_data.line_to((resize_x(i), resize_y(value)));
    }

    let revenue_line = Path::new()
        .set("fill", "none")
        .set("stroke", LINE_COLOR)
        .set("stroke-width", STROKE_WIDTH)
        .set("d", line_data);

    let yaxis = Line::new()
        .set("x1", 0.0)
        .set("x2", 0.0)
        .set("y1", 0.0)
        .set("y2", CHART_HEIGHT)
        .set("stroke", "black")
        .set("stroke-width", STROKE_WIDTH);
    let xaxis = Line::new()
        .set("x1", 0.0)
        .set("x2", CHART_WIDTH)
        .set("y1", CHART_HEIGHT)
        .set("y2", CHART_HEIGHT)
        .set("stroke", "black")
        .set("stroke-width", STROKE_WIDTH);

    let title = Text::new()
        .set("x", CHART_WIDTH / 2.0)
        .set("y", -MARGIN / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", 24)
        .add(TextNode::new("Revenue Comparison"));

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                -MARGIN,
                -MARGIN,
                CHART_WIDTH + 2.0 * MARGIN,
                CHART_HEIGHT + 2.0 * MARGIN,
            ),
        )
        .add(revenue_line)
        .add(yaxis)
        .add(xaxis)
        .add(title);

    for (i, &value) in data.revenue.iter().enumerate() {
        let marker = Circle::new()
            .set("cx", resize_x(i))
            .set("cy", resize_y(value))
            .set("r", MARKER_RADIUS)
            .set("fill", LINE_COLOR);
        document = document.add(marker);
    }

    for (i, label) in data.date.iter().enumerate() {
        let x = resize_x(i);
        let y = CHART_HEIGHT + 20.0;
        let label_node = Text::new()
            .set("x", x)
            .set("y", y)
            .set("text-anchor", "end")
            .set("font-size", 14)
            .set("transform", format!("rotate(-45 {} {})", x, y))
            .add(TextNode::new(label.as_str()));
        document = document.add(label_node);
    }

    document
}
