//! Chart drawing behind the [`ChartRenderer`] seam.

use std::fmt;

use num_traits::ToPrimitive;
use plotters::prelude::*;
use plotters::style::FontTransform;
use serde::{Deserialize, Serialize};

use super::series::ChartSeriesModel;
use crate::errors::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 600;

const MAX_X_LABELS: usize = 12;

/// Chart style requested by the caller. Affects only drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    StackedBar,
    Xy,
}

impl ChartKind {
    /// Case-insensitive; anything unrecognized draws a line chart.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "line" => ChartKind::Line,
            "bar" => ChartKind::Bar,
            "stacked_bar" | "stacked-bar" | "stackedbar" => ChartKind::StackedBar,
            "xy" => ChartKind::Xy,
            _ => ChartKind::Line,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::StackedBar => "stacked_bar",
            ChartKind::Xy => "xy",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a series model into a standalone SVG document.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, title: &str, kind: ChartKind, model: &ChartSeriesModel) -> Result<String>;
}

/// [`ChartRenderer`] drawing with the plotters SVG backend.
#[derive(Clone, Copy, Debug)]
pub struct SvgChartRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn render_err<E: fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Series values as plot coordinates, one row per series.
fn plot_values(model: &ChartSeriesModel) -> Vec<(String, Vec<f64>)> {
    model
        .series
        .iter()
        .map(|s| {
            let values = s.values.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect();
            (s.name.clone(), values)
        })
        .collect()
}

/// Y range with a little headroom. Bars always start from zero.
fn y_range(kind: ChartKind, rows: &[(String, Vec<f64>)], n: usize) -> (f64, f64) {
    let (lo, hi) = match kind {
        ChartKind::StackedBar => {
            let top = (0..n)
                .map(|i| rows.iter().map(|(_, v)| v[i].max(0.0)).sum::<f64>())
                .fold(0.0, f64::max);
            (0.0, top)
        }
        _ => {
            let all = rows.iter().flat_map(|(_, v)| v.iter().copied());
            let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
            if kind == ChartKind::Bar {
                (lo.min(0.0), hi.max(0.0))
            } else {
                (lo, hi)
            }
        }
    };

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let padding = ((hi - lo) * 0.05).max(1e-6);
    let lo = if lo == 0.0 { 0.0 } else { lo - padding };
    (lo, hi + padding)
}

impl SvgChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(
        &self,
        title: &str,
        kind: ChartKind,
        model: &ChartSeriesModel,
        out: &mut String,
    ) -> Result<()> {
        let n = model.len();
        let rows = plot_values(model);
        let (y_min, y_max) = y_range(kind, &rows, n);
        let x_max = n.max(1) as f64 - 0.5;

        let root = SVGBackend::with_string(out, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28).into_font())
            .margin(15)
            .x_label_area_size(90)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..x_max, y_min..y_max)
            .map_err(render_err)?;

        let labels = &model.x_labels;
        let label_at = |x: &f64| -> String {
            let i = x.round();
            if (x - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels
                .get(i as usize)
                .map(|l| l.to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .x_labels(n.clamp(1, MAX_X_LABELS))
            .x_label_formatter(&label_at)
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .y_desc("Price")
            .draw()
            .map_err(render_err)?;

        let group = rows.len().max(1) as f64;
        let mut stacked_base = vec![0.0; n];

        for (idx, (name, values)) in rows.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();

            let anno = match kind {
                ChartKind::Line => chart
                    .draw_series(LineSeries::new(
                        values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                        color.stroke_width(2),
                    ))
                    .map_err(render_err)?,
                ChartKind::Xy => {
                    chart
                        .draw_series(values.iter().enumerate().map(|(i, v)| {
                            Circle::new((i as f64, *v), 3, color.filled())
                        }))
                        .map_err(render_err)?;
                    chart
                        .draw_series(LineSeries::new(
                            values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                            color.stroke_width(1),
                        ))
                        .map_err(render_err)?
                }
                ChartKind::Bar => {
                    let width = 0.8 / group;
                    let offset = -0.4 + width * idx as f64;
                    chart
                        .draw_series(values.iter().enumerate().map(|(i, v)| {
                            let x0 = i as f64 + offset;
                            Rectangle::new([(x0, 0.0), (x0 + width, *v)], color.filled())
                        }))
                        .map_err(render_err)?
                }
                ChartKind::StackedBar => {
                    let bars: Vec<_> = values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| {
                            let base = stacked_base[i];
                            let top = base + v.max(0.0);
                            stacked_base[i] = top;
                            Rectangle::new(
                                [(i as f64 - 0.4, base), (i as f64 + 0.4, top)],
                                color.filled(),
                            )
                        })
                        .collect();
                    chart.draw_series(bars).map_err(render_err)?
                }
            };

            anno.label(name.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, title: &str, kind: ChartKind, model: &ChartSeriesModel) -> Result<String> {
        let mut svg = String::new();
        self.draw(title, kind, model, &mut svg)?;
        log::debug!(
            "Rendered {} chart '{}' with {} points ({} bytes)",
            kind,
            title,
            model.len(),
            svg.len()
        );
        Ok(svg)
    }
}
