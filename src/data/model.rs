use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// PostRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single post with its performance metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub platform: String,
    pub content_type: String,
    pub year: i32,
    pub date: NaiveDate,
    /// `None` for organic posts that are not part of a campaign.
    pub campaign_name: Option<String>,
    /// Hour of day the post went out, 0–23.
    pub post_hour: u8,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub engagement: f64,
    /// Percentage, e.g. `4.2` for 4.2 %.
    pub engagement_rate: f64,
    pub ad_spend: f64,
    /// Return ratio; `0.5` means +50 %, may be negative.
    pub roi: f64,
    /// Derived at load time, see [`revenue_generated`].
    pub revenue_generated: f64,
}

/// Revenue attributed to a post: `ad_spend × (1 + roi)`.
pub fn revenue_generated(ad_spend: f64, roi: f64) -> f64 {
    ad_spend * (1.0 + roi)
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values of each filter dimension.
///
/// Built once by the loader and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<PostRecord>,
    pub platforms: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl Dataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<PostRecord>) -> Self {
        let mut platforms = BTreeSet::new();
        let mut content_types = BTreeSet::new();
        let mut years = BTreeSet::new();

        for rec in &records {
            platforms.insert(rec.platform.clone());
            content_types.insert(rec.content_type.clone());
            years.insert(rec.year);
        }

        Dataset {
            records,
            platforms,
            content_types,
            years,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test fixtures shared by the data and state tests
// ---------------------------------------------------------------------------
