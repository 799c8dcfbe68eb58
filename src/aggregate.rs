//! Curve aggregation and chart data preparation.
//!
//! Turns a batch of decay curves into a render-ready `RenderSpec` without
//! touching any drawing code, so the plot-every-curve vs summary decision is
//! a pure function. Small batches pass every curve through; large batches
//! get per-round summary statistics plus a fixed-size random sample of
//! individual trials.

use crate::constants::{SUMMARY_MODE_THRESHOLD, SUMMARY_SAMPLE_SIZE, X_AXIS_LABEL, Y_AXIS_LABEL};
use rand::Rng;
use serde::Serialize;

/// How a series should be styled by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesKind {
    /// One individual trial curve.
    Trial,
    /// A derived statistic across all trials.
    Summary,
}

/// One labeled curve ready for plotting.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<f64>,
    pub kind: SeriesKind,
}

/// Everything the renderer needs for one chart. Consumed read-only.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSpec {
    pub series: Vec<Series>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend_title: &'static str,
}

impl RenderSpec {
    /// Longest series length, for x-axis bounds.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).max().unwrap_or(0)
    }
}

/// Right-pad every curve with zeros to the length of the longest one.
///
/// Zero is the semantically correct filler: past its exhaustion round a
/// trial's surviving population really is 0.
pub fn pad_curves(curves: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let max_len = curves.iter().map(|c| c.len()).max().unwrap_or(0);
    curves
        .iter()
        .map(|c| {
            let mut padded = c.clone();
            padded.resize(max_len, 0.0);
            padded
        })
        .collect()
}

fn column(padded: &[Vec<f64>], idx: usize) -> Vec<f64> {
    padded.iter().map(|c| c[idx]).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Per-round-index summary curves over a padded batch.
fn summary_series(padded: &[Vec<f64>]) -> Vec<Series> {
    let len = padded.first().map(|c| c.len()).unwrap_or(0);

    let mut avg = Vec::with_capacity(len);
    let mut med = Vec::with_capacity(len);
    let mut max = Vec::with_capacity(len);
    let mut min = Vec::with_capacity(len);

    for idx in 0..len {
        let col = column(padded, idx);
        avg.push(mean(&col));
        med.push(median(&col));
        max.push(col.iter().cloned().fold(f64::MIN, f64::max));
        min.push(col.iter().cloned().fold(f64::MAX, f64::min));
    }

    vec![
        Series {
            label: "Average Decay".to_string(),
            points: avg,
            kind: SeriesKind::Summary,
        },
        Series {
            label: "Median Decay".to_string(),
            points: med,
            kind: SeriesKind::Summary,
        },
        Series {
            label: "Max Decay".to_string(),
            points: max,
            kind: SeriesKind::Summary,
        },
        Series {
            label: "Min Decay".to_string(),
            points: min,
            kind: SeriesKind::Summary,
        },
    ]
}

/// Build the chart spec for a finished experiment.
///
/// Up to `SUMMARY_MODE_THRESHOLD` trials every curve is plotted as-is. Above
/// the threshold the chart shows four summary curves over the zero-padded
/// batch plus `SUMMARY_SAMPLE_SIZE` distinct randomly sampled trials. The
/// threshold (20) always exceeds the sample size (14), so sampling without
/// replacement cannot run short.
pub fn summarize(curves: &[Vec<f64>], rng: &mut impl Rng) -> RenderSpec {
    let trial_count = curves.len();

    if trial_count <= SUMMARY_MODE_THRESHOLD {
        let series = curves
            .iter()
            .enumerate()
            .map(|(idx, curve)| Series {
                label: format!("Trial {}", idx + 1),
                points: curve.clone(),
                kind: SeriesKind::Trial,
            })
            .collect();

        return RenderSpec {
            series,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            legend_title: "Trial Curves",
        };
    }

    let padded = pad_curves(curves);
    let mut series = summary_series(&padded);

    // Sampled trials keep their raw, unpadded curves.
    let mut indices = rand::seq::index::sample(rng, trial_count, SUMMARY_SAMPLE_SIZE).into_vec();
    indices.sort_unstable();
    for idx in indices {
        series.push(Series {
            label: format!("Trial {}", idx + 1),
            points: curves[idx].clone(),
            kind: SeriesKind::Trial,
        });
    }

    RenderSpec {
        series,
        x_label: X_AXIS_LABEL,
        y_label: Y_AXIS_LABEL,
        legend_title: "Summary",
    }
}
