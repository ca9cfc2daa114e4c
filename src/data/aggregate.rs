use std::collections::BTreeMap;

use super::filter::{apply, FilterSelection, FilteredView};
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Mean accumulator
// ---------------------------------------------------------------------------

/// Running mean that reports `None` instead of dividing by zero.
#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Groups only exist once a row was pushed, so the count is never zero.
    fn group_value(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// First key holding the maximum value.  Rows arrive in ascending key order,
/// so a strict `>` keeps the smallest key on ties.
fn argmax<'r, K: Clone + 'r>(rows: impl IntoIterator<Item = (&'r K, f64)>) -> Option<K> {
    let mut best: Option<(&K, f64)> = None;
    for (key, value) in rows {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key.clone())
}

// ---------------------------------------------------------------------------
// Result tables
// ---------------------------------------------------------------------------

/// Headline metrics over the filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub post_count: usize,
    pub total_engagement: f64,
    pub avg_engagement_rate: Option<f64>,
    pub total_ad_spend: f64,
    pub total_revenue: f64,
    pub avg_roi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRate {
    pub platform: String,
    pub mean_engagement_rate: f64,
}

/// Mean engagement rate per platform, ascending by platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformEngagement {
    pub rows: Vec<PlatformRate>,
    pub best_platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentPerformance {
    pub content_type: String,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSummary {
    pub campaign_name: String,
    pub ad_spend: f64,
    pub revenue_generated: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourEngagement {
    pub post_hour: u8,
    pub mean_engagement: f64,
}

/// Mean engagement per observed posting hour, ascending by hour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyEngagement {
    pub rows: Vec<HourEngagement>,
    pub best_hour: Option<u8>,
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResult {
    /// Indices into the dataset of the rows that passed the filter.
    pub visible_indices: Vec<usize>,
    pub kpis: KpiSummary,
    pub platform_engagement: PlatformEngagement,
    pub content_performance: Vec<ContentPerformance>,
    pub campaigns: Vec<CampaignSummary>,
    pub hourly: HourlyEngagement,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Filter `dataset` by `selection` and compute every aggregate.
pub fn run(dataset: &Dataset, selection: &FilterSelection) -> FilteredResult {
    summarize(&apply(dataset, selection))
}

/// Compute every aggregate over an already filtered view.
pub fn summarize(view: &FilteredView<'_>) -> FilteredResult {
    FilteredResult {
        visible_indices: view.indices().to_vec(),
        kpis: kpi_summary(view),
        platform_engagement: engagement_by_platform(view),
        content_performance: content_performance(view),
        campaigns: campaign_summary(view),
        hourly: hourly_engagement(view),
    }
}

pub fn kpi_summary(view: &FilteredView<'_>) -> KpiSummary {
    let mut kpis = KpiSummary::default();
    let mut rate = Mean::default();
    let mut roi = Mean::default();

    for rec in view.records() {
        kpis.post_count += 1;
        kpis.total_engagement += rec.engagement;
        kpis.total_ad_spend += rec.ad_spend;
        kpis.total_revenue += rec.revenue_generated;
        rate.push(rec.engagement_rate);
        roi.push(rec.roi);
    }

    kpis.avg_engagement_rate = rate.value();
    kpis.avg_roi = roi.value();
    kpis
}

pub fn engagement_by_platform(view: &FilteredView<'_>) -> PlatformEngagement {
    let mut groups: BTreeMap<&str, Mean> = BTreeMap::new();
    for rec in view.records() {
        groups
            .entry(rec.platform.as_str())
            .or_default()
            .push(rec.engagement_rate);
    }

    let rows: Vec<PlatformRate> = groups
        .into_iter()
        .map(|(platform, mean)| PlatformRate {
            platform: platform.to_string(),
            mean_engagement_rate: mean.group_value(),
        })
        .collect();
    let best_platform = argmax(rows.iter().map(|r| (&r.platform, r.mean_engagement_rate)));

    PlatformEngagement {
        rows,
        best_platform,
    }
}

pub fn content_performance(view: &FilteredView<'_>) -> Vec<ContentPerformance> {
    #[derive(Default)]
    struct Acc {
        likes: Mean,
        comments: Mean,
        shares: Mean,
        engagement: Mean,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for rec in view.records() {
        let acc = groups.entry(rec.content_type.as_str()).or_default();
        acc.likes.push(rec.likes);
        acc.comments.push(rec.comments);
        acc.shares.push(rec.shares);
        acc.engagement.push(rec.engagement);
    }

    groups
        .into_iter()
        .map(|(content_type, acc)| ContentPerformance {
            content_type: content_type.to_string(),
            likes: acc.likes.group_value(),
            comments: acc.comments.group_value(),
            shares: acc.shares.group_value(),
            engagement: acc.engagement.group_value(),
        })
        .collect()
}

pub fn campaign_summary(view: &FilteredView<'_>) -> Vec<CampaignSummary> {
    #[derive(Default)]
    struct Acc {
        ad_spend: Mean,
        revenue: Mean,
        roi: Mean,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    let campaign_rows = view
        .records()
        .filter_map(|rec| rec.campaign_name.as_deref().map(|name| (name, rec)));

    for (name, rec) in campaign_rows {
        let acc = groups.entry(name).or_default();
        acc.ad_spend.push(rec.ad_spend);
        acc.revenue.push(rec.revenue_generated);
        acc.roi.push(rec.roi);
    }

    groups
        .into_iter()
        .map(|(name, acc)| CampaignSummary {
            campaign_name: name.to_string(),
            ad_spend: acc.ad_spend.group_value(),
            revenue_generated: acc.revenue.group_value(),
            roi: acc.roi.group_value(),
        })
        .collect()
}

pub fn hourly_engagement(view: &FilteredView<'_>) -> HourlyEngagement {
    let mut groups: BTreeMap<u8, Mean> = BTreeMap::new();
    for rec in view.records() {
        groups.entry(rec.post_hour).or_default().push(rec.engagement);
    }

    let rows: Vec<HourEngagement> = groups
        .into_iter()
        .map(|(post_hour, mean)| HourEngagement {
            post_hour,
            mean_engagement: mean.group_value(),
        })
        .collect();
    let best_hour = argmax(rows.iter().map(|r| (&r.post_hour, r.mean_engagement)));

    HourlyEngagement { rows, best_hour }
}

impl FilteredResult {
    pub fn is_empty(&self) -> bool {
        self.visible_indices.is_empty()
    }
}
