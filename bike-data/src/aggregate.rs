//! Aggregations over a slice of records.
//!
//! Every function here is pure and accepts any slice, so the same code
//! serves both the filtered view and the full table. Which one each chart
//! receives is decided in [`crate::view::render`].

use bike_core::Record;
use bike_utils::numbers::round_to;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean ride count of one season, for the seasonal bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonMean {
    pub season: String,
    pub mean: f64,
    /// True for every season whose mean equals the maximum.
    pub highlighted: bool,
}

/// One (temperature, rides) point for the scatter charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub temperature: f64,
    pub count: u64,
}

/// All scatter points of one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonGroup {
    pub season: String,
    pub points: Vec<ScatterPoint>,
}

/// Sum of ride counts; 0 for no records.
pub fn total_usage(records: &[Record]) -> u64 {
    records.iter().map(|r| r.count).sum()
}

/// Mean ride count rounded to 2 decimals; `None` for no records.
pub fn average_usage(records: &[Record]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let mean = total_usage(records) as f64 / records.len() as f64;
    Some(round_to(mean, 2))
}

/// Mean ride count per season label, ordered by label, with the maximum
/// flagged. Records with an unknown season code form a group under the
/// empty label.
pub fn seasonal_means(records: &[Record]) -> Vec<SeasonMean> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.season_label).or_insert((0, 0));
        entry.0 += record.count;
        entry.1 += 1;
    }

    let means: Vec<(&str, f64)> = groups
        .into_iter()
        .map(|(label, (sum, n))| (label, sum as f64 / n as f64))
        .collect();

    let max_mean = means
        .iter()
        .map(|(_, mean)| *mean)
        .fold(f64::NEG_INFINITY, f64::max);

    means
        .into_iter()
        .map(|(label, mean)| SeasonMean {
            season: label.to_string(),
            mean,
            highlighted: mean == max_mean,
        })
        .collect()
}

/// Pearson correlation coefficient of two equally long series.
///
/// `None` when the series differ in length, hold fewer than two values, or
/// either one is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    if x.iter().all(|v| *v == x[0]) || y.iter().all(|v| *v == y[0]) {
        return None;
    }

    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some((cov / denominator).clamp(-1.0, 1.0))
}

/// Correlation between temperature and ride count, rounded to 2 decimals.
pub fn temperature_correlation(records: &[Record]) -> Option<f64> {
    let temperatures: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let counts: Vec<f64> = records.iter().map(|r| r.count as f64).collect();
    pearson(&temperatures, &counts).map(|r| round_to(r, 2))
}

/// Every record as a scatter point, in date order.
pub fn scatter_points(records: &[Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            temperature: r.temperature,
            count: r.count,
        })
        .collect()
}

/// Scatter points partitioned by season label, groups in order of first
/// occurrence.
pub fn season_scatter_groups(records: &[Record]) -> Vec<SeasonGroup> {
    let mut groups: Vec<SeasonGroup> = Vec::new();
    for record in records {
        let point = ScatterPoint {
            temperature: record.temperature,
            count: record.count,
        };
        match groups.iter_mut().find(|g| g.season == record.season_label) {
            Some(group) => group.points.push(point),
            None => groups.push(SeasonGroup {
                season: record.season_label.to_string(),
                points: vec![point],
            }),
        }
    }
    groups
}
