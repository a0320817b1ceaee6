use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::error::{CloudError, CloudResult};

/// One row of the wine-review dataset.
///
/// Field names match the CSV header of the winemag review dump; columns absent
/// from this struct (such as the unnamed leading index) are ignored on load.
/// Empty fields deserialize to `None`.
#[derive(Clone, Debug, Deserialize)]
pub struct WineReview {
    /// Country of origin.
    pub country: Option<String>,
    /// Free-text tasting notes; the source text for word clouds.
    pub description: String,
    /// Vineyard designation, when stated on the label.
    pub designation: Option<String>,
    /// Reviewer score on the 80-100 scale.
    pub points: u32,
    /// Bottle price in USD.
    pub price: Option<f64>,
    /// Province or state of origin.
    pub province: Option<String>,
    /// Primary growing region.
    pub region_1: Option<String>,
    /// Secondary growing region.
    pub region_2: Option<String>,
    /// Name of the reviewer.
    pub taster_name: Option<String>,
    /// Twitter handle of the reviewer.
    pub taster_twitter_handle: Option<String>,
    /// Review title, usually vintage and label.
    pub title: String,
    /// Grape variety.
    pub variety: Option<String>,
    /// Producing winery.
    pub winery: String,
}

impl WineReview {
    /// Number of dataset columns carried by this record type.
    pub const FIELD_COUNT: usize = 13;
}

/// An ordered collection of wine reviews loaded from a delimited file.
#[derive(Clone, Debug, Default)]
pub struct ReviewSet {
    reviews: Vec<WineReview>,
}

impl ReviewSet {
    /// Load reviews from a CSV file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> CloudResult<Self> {
        let file =
            File::open(path).with_context(|| format!("open dataset '{}'", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load reviews from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> CloudResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut reviews = Vec::new();
        for (row, result) in rdr.deserialize::<WineReview>().enumerate() {
            let review = result
                .map_err(|e| CloudError::dataset(format!("row {}: {e}", row + 1)))?;
            reviews.push(review);
        }
        tracing::debug!(rows = reviews.len(), "loaded review dataset");
        Ok(Self { reviews })
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the set holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// All reviews in load order.
    pub fn reviews(&self) -> &[WineReview] {
        &self.reviews
    }

    /// The review at `idx`, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<&WineReview> {
        self.reviews.get(idx)
    }

    /// Distinct countries in first-appearance order; reviews with no country
    /// are skipped.
    pub fn unique_countries(&self) -> Vec<&str> {
        first_appearance(self.reviews.iter().filter_map(|r| r.country.as_deref()))
    }

    /// Distinct grape varieties in first-appearance order; reviews with no
    /// variety are skipped.
    pub fn unique_varieties(&self) -> Vec<&str> {
        first_appearance(self.reviews.iter().filter_map(|r| r.variety.as_deref()))
    }

    /// All review descriptions joined with single spaces, in load order.
    pub fn joined_descriptions(&self) -> String {
        let mut out = String::new();
        for (i, review) in self.reviews.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&review.description);
        }
        out
    }
}

fn first_appearance<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/dataset.rs"]
mod tests;
