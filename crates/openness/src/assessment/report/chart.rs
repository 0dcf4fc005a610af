//! Geometry for the polar-bar and radar charts. Drawing is left to the caller.

use super::super::domain::Classification;
use super::super::scoring::DimensionResult;
use serde::Serialize;
use std::f64::consts::TAU;

pub const fn band_color(classification: Classification) -> &'static str {
    match classification {
        Classification::Low => "#DC6B67",
        Classification::Medium => "#E6B85C",
        Classification::High => "#6BBF8E",
        Classification::NotAvailable => "#9CA3AF",
    }
}

/// Splits a dimension name into one word per line.
pub fn multiline_label(dimension: &str) -> Vec<String> {
    dimension
        .replace('_', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// `count` evenly spaced angles over a full turn, starting at zero.
pub fn even_angles(count: usize) -> Vec<f64> {
    (0..count)
        .map(|index| TAU * index as f64 / count as f64)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarSlice {
    pub dimension: String,
    pub label_lines: Vec<String>,
    pub angle: f64,
    /// Bar width in radians (80% of the slot).
    pub width: f64,
    pub value: Option<f64>,
    pub classification: Classification,
    pub color: &'static str,
}

pub fn polar_layout(results: &[DimensionResult]) -> Vec<PolarSlice> {
    if results.is_empty() {
        return Vec::new();
    }

    let width = TAU / results.len() as f64 * 0.8;
    results
        .iter()
        .zip(even_angles(results.len()))
        .map(|(result, angle)| PolarSlice {
            dimension: result.dimension.clone(),
            label_lines: multiline_label(&result.dimension),
            angle,
            width,
            value: result.mean_score,
            classification: result.classification,
            color: band_color(result.classification),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub angle: f64,
    pub value: Option<f64>,
}

/// Radar polygon, closed by repeating the first vertex at the end.
pub fn radar_series(results: &[DimensionResult]) -> Vec<RadarPoint> {
    let mut points: Vec<RadarPoint> = results
        .iter()
        .zip(even_angles(results.len()))
        .map(|(result, angle)| RadarPoint {
            angle,
            value: result.mean_score,
        })
        .collect();

    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dimension: &str, mean: Option<f64>, classification: Classification) -> DimensionResult {
        DimensionResult {
            dimension: dimension.to_string(),
            mean_score: mean,
            answered_count: usize::from(mean.is_some()),
            variable_count: 1,
            classification,
        }
    }

    #[test]
    fn polar_layout_spreads_dimensions_over_full_turn() {
        let results = vec![
            result("OPEN NETWORK", Some(2.0), Classification::Low),
            result("OPEN MIND", Some(5.0), Classification::High),
            result("OPEN_USE", None, Classification::NotAvailable),
            result("OPEN SPACE", Some(3.0), Classification::Medium),
        ];

        let slices = polar_layout(&results);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].angle, 0.0);
        assert!((slices[1].angle - TAU / 4.0).abs() < 1e-12);
        assert!((slices[0].width - TAU / 4.0 * 0.8).abs() < 1e-12);
        assert_eq!(slices[1].color, "#6BBF8E");
        assert_eq!(slices[2].label_lines, vec!["OPEN", "USE"]);
        assert_eq!(slices[2].value, None);
    }

    #[test]
    fn radar_series_is_closed() {
        let results = vec![
            result("OPEN NETWORK", Some(2.0), Classification::Low),
            result("OPEN MIND", Some(5.0), Classification::High),
            result("OPEN SPACE", Some(3.0), Classification::Medium),
        ];

        let series = radar_series(&results);
        assert_eq!(series.len(), 4);
        assert_eq!(series.first(), series.last());
        assert!(radar_series(&[]).is_empty());
    }
}
