use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::model::{Histogram, LatencySummary};

/// Vertical strokes drawn per bar to fill it.
const FILL_STROKES: usize = 8;
/// Grid divisions along each axis.
const GRID_DIVISIONS: usize = 5;
/// Headroom above the tallest bar.
const Y_HEADROOM: f64 = 1.1;

const BAR_COLOR: Color = Color::Cyan;
const EDGE_COLOR: Color = Color::Black;
const GRID_COLOR: Color = Color::DarkGray;

/// Chart-space geometry for a histogram, independent of terminal size.
///
/// Bars are left aligned: each one is centred on its bin's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPlot {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Points for a `GraphType::Bar` dataset, several per bin.
    pub fill: Vec<(f64, f64)>,
    /// Step outline around every bar.
    pub edges: Vec<(f64, f64)>,
    pub grid: Vec<[(f64, f64); 2]>,
}

impl HistogramPlot {
    pub fn new(histogram: &Histogram) -> Self {
        let width = histogram.bin_width();
        let half = width / 2.0;
        let (x_min, x_max) = match (histogram.bins.first(), histogram.bins.last()) {
            (Some(first), Some(last)) => (first.start - half, last.start + half),
            _ => (0.0, 1.0),
        };
        let y_max = (histogram.max_count() as f64 * Y_HEADROOM).ceil().max(1.0);

        let mut fill = Vec::with_capacity(histogram.bins.len() * FILL_STROKES);
        let mut edges = Vec::with_capacity(histogram.bins.len() * 4);
        for bin in &histogram.bins {
            let left = bin.start - half;
            let right = bin.start + half;
            let h = bin.count as f64;
            if bin.count > 0 {
                for i in 0..FILL_STROKES {
                    let x = left + width * (i as f64 + 0.5) / FILL_STROKES as f64;
                    fill.push((x, h));
                }
            }
            edges.extend_from_slice(&[(left, 0.0), (left, h), (right, h), (right, 0.0)]);
        }

        let mut grid = Vec::with_capacity(2 * (GRID_DIVISIONS + 1));
        for x in ticks(x_min, x_max) {
            grid.push([(x, 0.0), (x, y_max)]);
        }
        for y in ticks(0.0, y_max) {
            grid.push([(x_min, y), (x_max, y)]);
        }

        Self {
            x_bounds: [x_min, x_max],
            y_bounds: [0.0, y_max],
            fill,
            edges,
            grid,
        }
    }

    pub fn x_labels(&self) -> Vec<String> {
        ticks(self.x_bounds[0], self.x_bounds[1])
            .map(|x| format!("{x:.0}"))
            .collect()
    }

    pub fn y_labels(&self) -> Vec<String> {
        ticks(self.y_bounds[0], self.y_bounds[1])
            .map(|y| format!("{y:.0}"))
            .collect()
    }
}

/// Evenly spaced values from `lo` to `hi` inclusive.
fn ticks(lo: f64, hi: f64) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / GRID_DIVISIONS as f64;
    (0..=GRID_DIVISIONS).map(move |i| lo + step * i as f64)
}

/// Render the histogram with axis titles, grid and bar outlines.
pub fn render_histogram(f: &mut Frame, area: Rect, plot: &HistogramPlot, title: &str) {
    let mut datasets: Vec<Dataset> = plot
        .grid
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(GRID_COLOR))
                .data(segment)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(BAR_COLOR))
            .data(&plot.fill),
    );
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(EDGE_COLOR))
            .data(&plot.edges),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title.to_string()).alignment(Alignment::Center)),
        )
        .x_axis(
            Axis::default()
                .title("Latency (ms)")
                .style(Style::default().fg(Color::Gray))
                .bounds(plot.x_bounds)
                .labels(plot.x_labels()),
        )
        .y_axis(
            Axis::default()
                .title("Frequency")
                .style(Style::default().fg(Color::Gray))
                .bounds(plot.y_bounds)
                .labels(plot.y_labels()),
        )
        .legend_position(None);
    f.render_widget(chart, area);
}

/// One-line statistics strip shown above the chart.
pub fn render_summary_line(f: &mut Frame, area: Rect, summary: &LatencySummary) {
    let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::Gray));
    let value = |s: String| Span::styled(s, Style::default().fg(Color::Yellow));

    let line = Line::from(vec![
        Span::styled(
            format!("p{}", summary.percentile),
            Style::default().fg(Color::Gray),
        ),
        value(format!(" {:.2} ms", summary.threshold_ms)),
        Span::raw("  "),
        label("median"),
        value(format!(" {} ms", summary.median_ms)),
        Span::raw("  "),
        label("outliers"),
        value(format!(" {}", summary.outliers_ms.len())),
        Span::raw("  "),
        label("samples"),
        value(format!(" {}", summary.count)),
        Span::raw("  "),
        label("timeouts"),
        value(format!(" {}", summary.timeouts)),
    ]);
    let p = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(p, area);
}
