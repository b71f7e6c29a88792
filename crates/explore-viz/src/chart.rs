//! Boxplot stacked over a histogram on a shared x axis

use crate::boxplot::BoxStats;
use crate::options::{ChartOptions, BAR_COLOR, MEAN_COLOR, MEDIAN_COLOR, MODE_COLOR};
use explore_core::{sorted_observed, Error, Observation, Result};
use explore_histogram::{builder_for, GaussianKde, Histogram, HistogramBuilder};
use explore_spread::Summary;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, instrument};

const FONT: &str = "sans-serif";
const KDE_POINTS: usize = 200;
/// Dash and gap length as a share of the y extent
const DASH_FRACTION: f64 = 0.03;

fn render_err(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// Everything drawn, computed before touching the backend
#[derive(Debug, Clone)]
struct ChartData {
    summary: Summary,
    boxplot: BoxStats,
    histogram: Histogram,
    /// `(x, count)` samples of the density curve
    kde: Option<Vec<(f64, f64)>>,
    x_range: Range<f64>,
    y_max: f64,
}

impl ChartData {
    fn compute(sorted: &[f64], options: &ChartOptions) -> Result<Self> {
        let summary = Summary::from_sorted(sorted)?;
        let boxplot = BoxStats::with_summary(sorted, &summary, options.whisker_width)?;
        let histogram = builder_for(options.bins)?.build_sorted(sorted)?;
        let edges = histogram.edges();
        let (Some(&lo), Some(&hi)) = (edges.first(), edges.last()) else {
            return Err(Error::empty_input());
        };

        let kde = if options.kde {
            match GaussianKde::new(sorted) {
                Ok(kde) => {
                    let width = histogram.bin_width();
                    let points = kde
                        .evaluate_grid(lo, hi, KDE_POINTS)
                        .into_iter()
                        .map(|(x, _)| (x, kde.evaluate_counts(x, width)))
                        .collect();
                    Some(points)
                }
                Err(err) => {
                    debug!(%err, "skipping density curve");
                    None
                }
            }
        } else {
            None
        };

        let curve_max = kde
            .iter()
            .flatten()
            .map(|&(_, y)| y)
            .fold(0.0_f64, f64::max);
        let y_max = (histogram.max_count() as f64).max(curve_max).max(1.0) * 1.1;

        let pad = 0.02 * (hi - lo);
        let x_range = (lo - pad)..(hi + pad);

        Ok(Self {
            summary,
            boxplot,
            histogram,
            kde,
            x_range,
            y_max,
        })
    }
}

/// Dash endpoints of a vertical line at `x` from `from` to `to`
fn dash_segments(x: f64, from: f64, to: f64, dash: f64) -> Vec<[(f64, f64); 2]> {
    let mut segments = Vec::new();
    if dash <= 0.0 {
        return segments;
    }
    let mut y = from;
    while y < to {
        segments.push([(x, y), (x, (y + dash).min(to))]);
        y += 2.0 * dash;
    }
    segments
}

fn dashed_line(
    x: f64,
    from: f64,
    to: f64,
    dash: f64,
    style: ShapeStyle,
) -> impl Iterator<Item = PathElement<(f64, f64)>> {
    dash_segments(x, from, to, dash)
        .into_iter()
        .map(move |[a, b]| PathElement::new(vec![a, b], style))
}

/// Horizontal boxplot over a histogram with density curve and reference lines
///
/// The mean (orange), mode (green) and median (red) are drawn as dashed
/// vertical lines across the histogram; the box shows the median and mean as
/// dashed lines in the same colours.
#[derive(Debug, Clone, Default)]
pub struct HistBoxChart {
    options: ChartOptions,
}

impl HistBoxChart {
    pub fn new(options: ChartOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Render the chart of `sample` as an SVG document
    ///
    /// Missing entries are ignored. Fails with `InsufficientData` when nothing
    /// is observed.
    #[instrument(skip(self, sample), fields(len = sample.len()))]
    pub fn render<T: Observation>(&self, sample: &[T]) -> Result<String> {
        let sorted = sorted_observed(sample);
        if sorted.is_empty() {
            return Err(Error::empty_input());
        }
        let data = ChartData::compute(&sorted, &self.options)?;
        debug!(
            bins = data.histogram.len(),
            fliers = data.boxplot.fliers.len(),
            "rendering chart"
        );

        let mut svg = String::new();
        {
            let (width, height) = (self.options.width, self.options.height);
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;
            let root = match &self.options.title {
                Some(title) => root.titled(title, (FONT, 22)).map_err(render_err)?,
                None => root,
            };
            let box_height = (root.dim_in_pixel().1 as f64 * self.options.box_ratio) as u32;
            let (upper, lower) = root.split_vertically(box_height);

            self.draw_box_panel(&upper, &data)?;
            self.draw_histogram_panel(&lower, &data)?;
            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }

    /// Write the SVG document to `path`
    pub fn render_to_file<T: Observation>(&self, sample: &[T], path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render(sample)?;
        std::fs::write(path, svg)?;
        Ok(())
    }

    fn draw_box_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<()> {
        let mut chart = ChartBuilder::on(area)
            .margin_top(5)
            .margin_right(15)
            .y_label_area_size(50)
            .build_cartesian_2d(data.x_range.clone(), 0.0..1.0)
            .map_err(render_err)?;
        chart
            .configure_mesh()
            .disable_y_mesh()
            .disable_y_axis()
            .disable_x_axis()
            .bold_line_style(RGBColor(128, 128, 128).mix(0.3))
            .light_line_style(TRANSPARENT)
            .draw()
            .map_err(render_err)?;

        let stats = &data.boxplot;
        let (q1, q3) = (stats.fences.q1, stats.fences.q3);
        let (bottom, top, mid) = (0.25, 0.75, 0.5);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(q1, bottom), (q3, top)],
                BAR_COLOR.mix(0.6).filled(),
            )))
            .map_err(render_err)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(q1, bottom), (q3, top)],
                BLACK.stroke_width(1),
            )))
            .map_err(render_err)?;

        let whiskers = [
            vec![(stats.whisker_low, mid), (q1, mid)],
            vec![(q3, mid), (stats.whisker_high, mid)],
            vec![(stats.whisker_low, 0.35), (stats.whisker_low, 0.65)],
            vec![(stats.whisker_high, 0.35), (stats.whisker_high, 0.65)],
        ];
        chart
            .draw_series(
                whiskers
                    .into_iter()
                    .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
            )
            .map_err(render_err)?;

        let dash = (top - bottom) / 6.0;
        for (x, color) in [(stats.median, MEDIAN_COLOR), (stats.mean, MEAN_COLOR)] {
            chart
                .draw_series(dashed_line(x, bottom, top, dash, color.stroke_width(2)))
                .map_err(render_err)?;
        }

        chart
            .draw_series(
                stats
                    .fliers
                    .iter()
                    .map(|&x| Circle::new((x, mid), 3, BLACK.stroke_width(1))),
            )
            .map_err(render_err)?;
        Ok(())
    }

    fn draw_histogram_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<()> {
        let mut chart = ChartBuilder::on(area)
            .margin_right(15)
            .margin_bottom(5)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(data.x_range.clone(), 0.0..data.y_max)
            .map_err(render_err)?;
        chart
            .configure_mesh()
            .x_desc(self.options.x_label.as_deref().unwrap_or(""))
            .y_desc("Count")
            .axis_desc_style((FONT, 14))
            .label_style((FONT, 12))
            .bold_line_style(RGBColor(128, 128, 128).mix(0.3))
            .light_line_style(TRANSPARENT)
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(data.histogram.bins().iter().map(|bin| {
                Rectangle::new(
                    [(bin.left, 0.0), (bin.right, bin.count as f64)],
                    BAR_COLOR.mix(0.5).filled(),
                )
            }))
            .map_err(render_err)?;
        chart
            .draw_series(data.histogram.bins().iter().map(|bin| {
                Rectangle::new(
                    [(bin.left, 0.0), (bin.right, bin.count as f64)],
                    BAR_COLOR.stroke_width(1),
                )
            }))
            .map_err(render_err)?;

        if let Some(points) = &data.kde {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), BAR_COLOR.stroke_width(2)))
                .map_err(render_err)?;
        }

        let lines = [
            ("Mean", data.summary.mean, MEAN_COLOR),
            ("Mode", data.summary.mode, MODE_COLOR),
            ("Median", data.summary.median, MEDIAN_COLOR),
        ];
        for (label, x, color) in lines {
            chart
                .draw_series(dashed_line(
                    x,
                    0.0,
                    data.y_max,
                    data.y_max * DASH_FRACTION,
                    color.stroke_width(2),
                ))
                .map_err(render_err)?
                .label(format!("{label}: {x:.2}"))
                .legend(move |(lx, ly)| {
                    PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, 12))
            .draw()
            .map_err(render_err)?;
        Ok(())
    }
}

/// Render `sample` with `options` as an SVG document
pub fn render_svg<T: Observation>(sample: &[T], options: &ChartOptions) -> Result<String> {
    HistBoxChart::new(options.clone())?.render(sample)
}

/// Render `sample` with `options` into an SVG file
pub fn render_to_file<T: Observation>(
    sample: &[T],
    options: &ChartOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    HistBoxChart::new(options.clone())?.render_to_file(sample, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::BinRule;

    #[test]
    fn test_dash_segments_cover_the_line() {
        let segments = dash_segments(1.0, 0.0, 1.0, 0.25);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [(1.0, 0.0), (1.0, 0.25)]);
        assert_eq!(segments[1], [(1.0, 0.5), (1.0, 0.75)]);
        assert!(dash_segments(1.0, 0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_chart_data_scales_density_to_counts() {
        let sample: Vec<f64> = (0..200).map(|i| ((i * 37) % 100) as f64 / 10.0).collect();
        let sorted = sorted_observed(&sample);
        let options = ChartOptions::default().with_bins(BinRule::Count(10));
        let data = ChartData::compute(&sorted, &options).unwrap();

        assert_eq!(data.histogram.len(), 10);
        assert_eq!(data.histogram.total_count(), 200);
        let curve = data.kde.as_ref().unwrap();
        assert_eq!(curve.len(), KDE_POINTS);
        // Uniform data: the curve sits near the bar height in the middle
        let (_, mid) = curve[KDE_POINTS / 2];
        assert!((mid - 20.0).abs() < 5.0, "density at centre {mid}");
        assert!(data.y_max >= data.histogram.max_count() as f64);
        assert!(data.x_range.start < data.summary.min && data.x_range.end > data.summary.max);
    }

    #[test]
    fn test_constant_sample_skips_density() {
        let sorted = vec![3.0; 5];
        let data = ChartData::compute(&sorted, &ChartOptions::default()).unwrap();
        assert!(data.kde.is_none());
        assert_eq!(data.histogram.total_count(), 5);
    }
}
