use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::ReviewSet;

/// Per-country aggregate over the review dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountrySummary {
    /// Country of origin.
    pub country: String,
    /// Number of reviewed wines from this country.
    pub wines: u64,
    /// Mean reviewer score.
    pub mean_points: f64,
    /// Highest reviewer score.
    pub max_points: u32,
}

/// Aggregate column used when sorting summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    /// Sort by wine count.
    Wines,
    /// Sort by mean points.
    MeanPoints,
    /// Sort by maximum points.
    MaxPoints,
}

/// Group reviews by country and aggregate count, mean points, and max points.
///
/// Reviews with no country are excluded from grouping. The result is ordered
/// by country name ascending; every group holds at least one review, so means
/// are always defined.
pub fn summarize_by_country(set: &ReviewSet) -> Vec<CountrySummary> {
    let mut groups: BTreeMap<&str, (u64, u64, u32)> = BTreeMap::new();
    for review in set.reviews() {
        let Some(country) = review.country.as_deref() else {
            continue;
        };
        let entry = groups.entry(country).or_insert((0, 0, 0));
        entry.0 += 1;
        entry.1 += u64::from(review.points);
        entry.2 = entry.2.max(review.points);
    }
    groups
        .into_iter()
        .map(|(country, (wines, point_sum, max_points))| CountrySummary {
            country: country.to_string(),
            wines,
            mean_points: point_sum as f64 / wines as f64,
            max_points,
        })
        .collect()
}

/// Sort summaries by the given column, ascending or descending.
///
/// The sort is stable, so ties keep the incoming (country-ascending) order.
pub fn sort_summaries(rows: &mut [CountrySummary], by: SortBy, descending: bool) {
    rows.sort_by(|a, b| {
        let ord = match by {
            SortBy::Wines => a.wines.cmp(&b.wines),
            SortBy::MaxPoints => a.max_points.cmp(&b.max_points),
            SortBy::MeanPoints => a.mean_points.total_cmp(&b.mean_points),
        };
        if descending { ord.reverse() } else { ord }
    });
}

#[cfg(test)]
#[path = "../tests/unit/stats.rs"]
mod tests;
