//! Writes a synthetic post dataset so the dashboard can run without real data.
//!
//! ```text
//! cargo run --bin generate_sample [-- <output-stem>]
//! ```
//! produces `<output-stem>.csv` and `<output-stem>.parquet`
//! (default stem: `social_media_engagement`).

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, Duration, NaiveDate};
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const PLATFORMS: [(&str, f64); 5] = [
    ("Facebook", 0.8),
    ("Instagram", 1.3),
    ("LinkedIn", 0.9),
    ("TikTok", 1.6),
    ("YouTube", 1.1),
];
const CONTENT_TYPES: [(&str, f64); 4] = [("Carousel", 1.1), ("Image", 0.8), ("Reel", 1.5), ("Video", 1.2)];
const CAMPAIGNS: [&str; 4] = ["Brand Awareness", "Festive Sale", "Product Launch", "Summer Promo"];
const ROWS: usize = 1500;

#[derive(Debug, Serialize)]
struct Post {
    platform: &'static str,
    content_type: &'static str,
    year: i64,
    date: String,
    campaign_name: Option<&'static str>,
    post_hour: i64,
    likes: f64,
    comments: f64,
    shares: f64,
    engagement: f64,
    engagement_rate: f64,
    ad_spend: f64,
    roi: f64,
}

/// Minimal deterministic PRNG (splitmix64).
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Engagement peaks around lunch and in the evening.
fn hour_factor(hour: i64) -> f64 {
    match hour {
        12..=14 => 1.3,
        18..=21 => 1.6,
        0..=5 => 0.4,
        _ => 1.0,
    }
}

fn generate(rng: &mut SplitMix) -> Vec<Post> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();

    (0..ROWS)
        .map(|_| {
            let date = start + Duration::days((rng.unit() * 1095.0) as i64);
            let (platform, p_factor) = *rng.pick(&PLATFORMS);
            let (content_type, c_factor) = *rng.pick(&CONTENT_TYPES);
            let post_hour = (rng.unit() * 24.0) as i64;
            let reach = rng.range(2_000.0, 20_000.0);

            let boost = p_factor * c_factor * hour_factor(post_hour);
            let likes = (reach * 0.03 * boost * rng.range(0.6, 1.4)).round();
            let comments = (likes * rng.range(0.05, 0.15)).round();
            let shares = (likes * rng.range(0.02, 0.10)).round();
            let engagement = likes + comments + shares;
            let engagement_rate = (engagement / reach * 10_000.0).round() / 100.0;

            // Roughly a third of posts are organic.
            let campaign_name = (rng.unit() > 0.35).then(|| *rng.pick(&CAMPAIGNS));
            let (ad_spend, roi) = match campaign_name {
                Some(_) => (
                    rng.range(500.0, 15_000.0).round(),
                    (rng.range(-0.4, 2.5) * 100.0).round() / 100.0,
                ),
                None => (0.0, 0.0),
            };

            Post {
                platform,
                content_type,
                year: i64::from(date.year()),
                date: date.format("%Y-%m-%d").to_string(),
                campaign_name,
                post_hour,
                likes,
                comments,
                shares,
                engagement,
                engagement_rate,
                ad_spend,
                roi,
            }
        })
        .collect()
}

fn write_csv(path: &str, posts: &[Post]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for post in posts {
        writer.serialize(post)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, posts: &[Post]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("platform", DataType::Utf8, false),
        Field::new("content_type", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("date", DataType::Utf8, false),
        Field::new("campaign_name", DataType::Utf8, true),
        Field::new("post_hour", DataType::Int64, false),
        Field::new("likes", DataType::Float64, false),
        Field::new("comments", DataType::Float64, false),
        Field::new("shares", DataType::Float64, false),
        Field::new("engagement", DataType::Float64, false),
        Field::new("engagement_rate", DataType::Float64, false),
        Field::new("ad_spend", DataType::Float64, false),
        Field::new("roi", DataType::Float64, false),
    ]));

    let floats = |f: fn(&Post) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(posts.iter().map(f)))
    };
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.platform))),
        Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.content_type))),
        Arc::new(Int64Array::from_iter_values(posts.iter().map(|p| p.year))),
        Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.date.as_str()))),
        Arc::new(StringArray::from(posts.iter().map(|p| p.campaign_name).collect::<Vec<_>>())),
        Arc::new(Int64Array::from_iter_values(posts.iter().map(|p| p.post_hour))),
        floats(|p| p.likes),
        floats(|p| p.comments),
        floats(|p| p.shares),
        floats(|p| p.engagement),
        floats(|p| p.engagement_rate),
        floats(|p| p.ad_spend),
        floats(|p| p.roi),
    ];

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let stem = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "social_media_engagement".to_string());

    let mut rng = SplitMix(42);
    let posts = generate(&mut rng);

    let csv_path = format!("{stem}.csv");
    let parquet_path = format!("{stem}.parquet");
    write_csv(&csv_path, &posts)?;
    write_parquet(&parquet_path, &posts)?;

    let organic = posts.iter().filter(|p| p.campaign_name.is_none()).count();
    println!(
        "Wrote {} posts ({organic} organic) to {csv_path} and {parquet_path}",
        posts.len()
    );
    Ok(())
}
