use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{revenue_generated, Dataset, PostRecord};

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "platform",
    "content_type",
    "year",
    "date",
    "post_hour",
    "likes",
    "comments",
    "shares",
    "engagement",
    "engagement_rate",
    "ad_spend",
    "roi",
];

/// Optional column; rows without a value are organic posts.
pub const CAMPAIGN_COLUMN: &str = "campaign_name";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`Dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("dataset contains no rows")]
    Empty,
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: unparsable date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: invalid {column}: {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        reason: String,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed parquet: {0}")]
    Parquet(#[from] ParquetError),
    #[error("unreadable parquet column: {0}")]
    Arrow(#[from] ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a post dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the columns in [`REQUIRED_COLUMNS`] (recommended)
/// * `.json`    – `[{ "platform": "...", "date": "2023-01-05", ... }, ...]`
/// * `.parquet` – one column per field; dates as `Date32`, timestamps or ISO strings
///
/// Revenue is derived here, once, for every row.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => parse_csv(open(path)?)?,
        "json" => parse_json(BufReader::new(open(path)?))?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let dataset = Dataset::from_records(records);
    log::info!(
        "Loaded {} posts from {} ({} platforms, {} content types, years {:?})",
        dataset.len(),
        path.display(),
        dataset.platforms.len(),
        dataset.content_types.len(),
        dataset.years,
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn check_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Result<(), LoadError> {
    let present: BTreeSet<&str> = columns.into_iter().collect();
    match REQUIRED_COLUMNS.iter().find(|c| !present.contains(*c)) {
        Some(missing) => Err(LoadError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Row validation shared by every format
// ---------------------------------------------------------------------------

/// One untyped row as it comes out of a file, before validation.
#[derive(Debug, Deserialize)]
struct RawPost {
    platform: String,
    content_type: String,
    year: i64,
    date: String,
    #[serde(default)]
    campaign_name: Option<String>,
    post_hour: i64,
    likes: f64,
    comments: f64,
    shares: f64,
    engagement: f64,
    engagement_rate: f64,
    ad_spend: f64,
    roi: f64,
}

impl RawPost {
    fn into_record(self, row: usize) -> Result<PostRecord, LoadError> {
        let invalid = |column: &'static str, reason: String| LoadError::InvalidValue {
            row,
            column,
            reason,
        };

        let date = parse_date(&self.date).ok_or_else(|| LoadError::InvalidDate {
            row,
            value: self.date.clone(),
        })?;

        let platform = self.platform.trim().to_string();
        if platform.is_empty() {
            return Err(invalid("platform", "empty value".into()));
        }
        let content_type = self.content_type.trim().to_string();
        if content_type.is_empty() {
            return Err(invalid("content_type", "empty value".into()));
        }

        let year = i32::try_from(self.year)
            .map_err(|_| invalid("year", format!("{} is out of range", self.year)))?;
        let post_hour = u8::try_from(self.post_hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or_else(|| invalid("post_hour", format!("{} is outside 0-23", self.post_hour)))?;

        for (column, value) in [
            ("likes", self.likes),
            ("comments", self.comments),
            ("shares", self.shares),
            ("engagement", self.engagement),
            ("ad_spend", self.ad_spend),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(column, format!("{value} is not a non-negative number")));
            }
        }
        for (column, value) in [("engagement_rate", self.engagement_rate), ("roi", self.roi)] {
            if !value.is_finite() {
                return Err(invalid(column, format!("{value} is not a finite number")));
            }
        }

        let campaign_name = self
            .campaign_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(PostRecord {
            platform,
            content_type,
            year,
            date,
            campaign_name,
            post_hour,
            likes: self.likes,
            comments: self.comments,
            shares: self.shares,
            engagement: self.engagement,
            engagement_rate: self.engagement_rate,
            ad_spend: self.ad_spend,
            roi: self.roi,
            revenue_generated: revenue_generated(self.ad_spend, self.roi),
        })
    }
}

/// Parse a calendar date.  Only year-first layouts are accepted so that
/// `03/04/2023`-style ambiguity can never slip through.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one post per line.
/// Extra columns are ignored; an empty `campaign_name` cell means "no campaign".
pub fn parse_csv<R: Read>(input: R) -> Result<Vec<PostRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    check_columns(headers.iter())?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawPost>().enumerate() {
        records.push(result?.into_record(row)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records', date_format='iso')`):
///
/// ```json
/// [
///   { "platform": "Instagram", "content_type": "Reel", "year": 2023,
///     "date": "2023-01-05", "campaign_name": null, "post_hour": 9, ... },
///   ...
/// ]
/// ```
pub fn parse_json<R: Read>(input: R) -> Result<Vec<PostRecord>, LoadError> {
    let rows: Vec<serde_json::Map<String, JsonValue>> = serde_json::from_reader(input)?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, obj) in rows.into_iter().enumerate() {
        check_columns(obj.keys().map(String::as_str))?;
        let raw: RawPost = serde_json::from_value(JsonValue::Object(obj))?;
        records.push(raw.into_record(row)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of posts.
///
/// Column types are coerced through Arrow casts, so files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`) work
/// whether integers came out as Int32 or Int64 and dates as `Date32`,
/// timestamps or strings.
fn load_parquet(path: &Path) -> Result<Vec<PostRecord>, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    check_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut row_offset = 0;

    for batch_result in reader {
        let batch = batch_result?;
        let columns = BatchColumns::from_batch(&batch)?;

        for i in 0..batch.num_rows() {
            let row = row_offset + i;
            records.push(columns.raw_post(i, row)?.into_record(row)?);
        }
        row_offset += batch.num_rows();
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// The columns of one record batch, each cast to the type [`RawPost`] wants.
struct BatchColumns {
    columns: BTreeMap<&'static str, ArrayRef>,
    campaign: Option<ArrayRef>,
}

impl BatchColumns {
    fn from_batch(batch: &RecordBatch) -> Result<Self, LoadError> {
        let schema = batch.schema();
        let mut columns = BTreeMap::new();

        for name in REQUIRED_COLUMNS {
            let target = match name {
                "year" | "post_hour" => DataType::Int64,
                "platform" | "content_type" | "date" => DataType::Utf8,
                _ => DataType::Float64,
            };
            let idx = schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name.to_string()))?;
            columns.insert(name, cast(batch.column(idx), &target)?);
        }

        let campaign = match schema.index_of(CAMPAIGN_COLUMN) {
            Ok(idx) => Some(cast(batch.column(idx), &DataType::Utf8)?),
            Err(_) => None,
        };

        Ok(BatchColumns { columns, campaign })
    }

    fn raw_post(&self, i: usize, row: usize) -> Result<RawPost, LoadError> {
        let campaign_name = self.campaign.as_ref().and_then(|col| {
            let arr = col.as_string_opt::<i32>()?;
            (!arr.is_null(i)).then(|| arr.value(i).to_string())
        });

        Ok(RawPost {
            platform: self.string(i, row, "platform")?,
            content_type: self.string(i, row, "content_type")?,
            year: self.int(i, row, "year")?,
            date: self.string(i, row, "date")?,
            campaign_name,
            post_hour: self.int(i, row, "post_hour")?,
            likes: self.float(i, row, "likes")?,
            comments: self.float(i, row, "comments")?,
            shares: self.float(i, row, "shares")?,
            engagement: self.float(i, row, "engagement")?,
            engagement_rate: self.float(i, row, "engagement_rate")?,
            ad_spend: self.float(i, row, "ad_spend")?,
            roi: self.float(i, row, "roi")?,
        })
    }

    fn column(&self, i: usize, row: usize, name: &'static str) -> Result<&ArrayRef, LoadError> {
        let col = self
            .columns
            .get(name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?;
        if col.is_null(i) {
            return Err(LoadError::InvalidValue {
                row,
                column: name,
                reason: "missing or non-convertible value".into(),
            });
        }
        Ok(col)
    }

    fn mistyped(row: usize, name: &'static str) -> LoadError {
        LoadError::InvalidValue {
            row,
            column: name,
            reason: "unexpected column type".into(),
        }
    }

    fn string(&self, i: usize, row: usize, name: &'static str) -> Result<String, LoadError> {
        let arr = self
            .column(i, row, name)?
            .as_string_opt::<i32>()
            .ok_or_else(|| Self::mistyped(row, name))?;
        Ok(arr.value(i).to_string())
    }

    fn int(&self, i: usize, row: usize, name: &'static str) -> Result<i64, LoadError> {
        let arr = self
            .column(i, row, name)?
            .as_primitive_opt::<Int64Type>()
            .ok_or_else(|| Self::mistyped(row, name))?;
        Ok(arr.value(i))
    }

    fn float(&self, i: usize, row: usize, name: &'static str) -> Result<f64, LoadError> {
        let arr = self
            .column(i, row, name)?
            .as_primitive_opt::<Float64Type>()
            .ok_or_else(|| Self::mistyped(row, name))?;
        Ok(arr.value(i))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Date32Array, Float64Array, Int32Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const HEADER: &str = "platform,content_type,year,date,campaign_name,post_hour,likes,comments,shares,engagement,engagement_rate,ad_spend,roi";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn csv_rows_are_typed_and_revenue_is_derived() {
        let text = csv_with(&[
            "Instagram,Reel,2023,2023-01-05,Spring Launch,9,120,14,6,140,4.5,100,0.5",
            "TikTok,Video,2024,2024-02-10 18:30:00,,21,80,5,2,87,3.1,50,-0.2",
        ]);
        let records = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.platform, "Instagram");
        assert_eq!(first.year, 2023);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
        assert_eq!(first.campaign_name.as_deref(), Some("Spring Launch"));
        assert_eq!(first.post_hour, 9);
        assert_eq!(first.revenue_generated, 150.0);

        let second = &records[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(second.campaign_name, None);
        assert!((second.revenue_generated - 40.0).abs() < 1e-9);
    }

    #[test]
    fn csv_without_campaign_column_is_accepted() {
        let text = "platform,content_type,year,date,post_hour,likes,comments,shares,engagement,engagement_rate,ad_spend,roi\n\
                    X,Image,2023,2023-06-01,14,1,1,1,3,0.5,10,0.0";
        let records = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].campaign_name.is_none());
    }

    #[test]
    fn csv_missing_required_column_is_rejected() {
        let text = "platform,content_type,year,date,post_hour,likes,comments,shares,engagement,engagement_rate,roi\n\
                    X,Image,2023,2023-06-01,14,1,1,1,3,0.5,0.0";
        let err = parse_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "ad_spend"), "{err}");
    }

    #[test]
    fn unparsable_date_reports_row_and_value() {
        let text = csv_with(&[
            "X,Image,2023,2023-06-01,,14,1,1,1,3,0.5,10,0.0",
            "X,Image,2023,next tuesday,,14,1,1,1,3,0.5,10,0.0",
        ]);
        let err = parse_csv(text.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidDate { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "next tuesday");
            }
            other => panic!("expected InvalidDate, got {other}"),
        }
    }

    #[test]
    fn post_hour_outside_day_is_rejected() {
        let text = csv_with(&["X,Image,2023,2023-06-01,,24,1,1,1,3,0.5,10,0.0"]);
        let err = parse_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { column: "post_hour", .. }), "{err}");
    }

    #[test]
    fn negative_ad_spend_is_rejected_but_negative_roi_is_not() {
        let bad = csv_with(&["X,Image,2023,2023-06-01,,8,1,1,1,3,0.5,-10,0.0"]);
        let err = parse_csv(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { column: "ad_spend", .. }), "{err}");

        let ok = csv_with(&["X,Image,2023,2023-06-01,,8,1,1,1,3,0.5,10,-0.9"]);
        assert_eq!(parse_csv(ok.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn non_numeric_cell_is_a_csv_error() {
        let text = csv_with(&["X,Image,2023,2023-06-01,,8,lots,1,1,3,0.5,10,0.0"]);
        assert!(matches!(parse_csv(text.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn empty_input_is_empty_error() {
        assert!(matches!(parse_csv("".as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn date_parser_accepts_year_first_layouts_only() {
        let expected = NaiveDate::from_ymd_opt(2023, 4, 3).unwrap();
        for s in [
            "2023-04-03",
            "2023/04/03",
            " 2023-04-03 ",
            "2023-04-03 10:15:00",
            "2023-04-03T10:15:00",
            "2023-04-03T10:15:00.250",
            "2023-04-03T10:15:00+02:00",
        ] {
            assert_eq!(parse_date(s), Some(expected), "{s}");
        }
        assert_eq!(parse_date("03/04/2023"), None);
        assert_eq!(parse_date("2023-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn json_records_are_loaded() {
        let text = r#"[
            {"platform": "YouTube", "content_type": "Video", "year": 2023, "date": "2023-07-01",
             "campaign_name": null, "post_hour": 20, "likes": 300, "comments": 40, "shares": 25,
             "engagement": 365, "engagement_rate": 6.2, "ad_spend": 200, "roi": 0.1},
            {"platform": "YouTube", "content_type": "Short", "year": 2023, "date": "2023-07-02",
             "campaign_name": "Summer", "post_hour": 7, "likes": 30, "comments": 4, "shares": 2,
             "engagement": 36, "engagement_rate": 1.2, "ad_spend": 0, "roi": 0}
        ]"#;
        let records = parse_json(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].campaign_name.is_none());
        assert!((records[0].revenue_generated - 220.0).abs() < 1e-9);
        assert_eq!(records[1].campaign_name.as_deref(), Some("Summer"));
    }

    #[test]
    fn json_missing_column_is_rejected() {
        let text = r#"[{"platform": "YouTube", "content_type": "Video", "year": 2023}]"#;
        assert!(matches!(parse_json(text.as_bytes()), Err(LoadError::MissingColumn(_))));
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.CSV");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", csv_with(&["X,Image,2023,2023-06-01,,14,1,1,1,3,0.5,10,0.0"])).unwrap();

        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.platforms.contains("X"));
    }

    #[test]
    fn load_file_rejects_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, HEADER).unwrap();
        assert!(matches!(load_file(&path), Err(LoadError::Empty)));
    }

    #[test]
    fn load_file_missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        match load_file(&path) {
            Err(LoadError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_file_unknown_extension_is_rejected() {
        let err = load_file(Path::new("posts.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ref e) if e == "xlsx"));
    }

    #[test]
    fn parquet_columns_are_coerced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.parquet");

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let day = |y, m, d| (NaiveDate::from_ymd_opt(y, m, d).unwrap() - epoch).num_days() as i32;

        let schema = Arc::new(Schema::new(vec![
            Field::new("platform", DataType::Utf8, false),
            Field::new("content_type", DataType::Utf8, false),
            Field::new("year", DataType::Int32, false),
            Field::new("date", DataType::Date32, false),
            Field::new("campaign_name", DataType::Utf8, true),
            Field::new("post_hour", DataType::Int64, false),
            Field::new("likes", DataType::Float64, false),
            Field::new("comments", DataType::Float64, false),
            Field::new("shares", DataType::Float64, false),
            Field::new("engagement", DataType::Int64, false),
            Field::new("engagement_rate", DataType::Float64, false),
            Field::new("ad_spend", DataType::Float64, false),
            Field::new("roi", DataType::Float64, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec!["Instagram", "LinkedIn"])),
            Arc::new(StringArray::from(vec!["Reel", "Article"])),
            Arc::new(Int32Array::from(vec![2023, 2024])),
            Arc::new(Date32Array::from(vec![day(2023, 1, 5), day(2024, 8, 30)])),
            Arc::new(StringArray::from(vec![Some("Launch"), None])),
            Arc::new(Int64Array::from(vec![9, 17])),
            Arc::new(Float64Array::from(vec![100.0, 20.0])),
            Arc::new(Float64Array::from(vec![10.0, 3.0])),
            Arc::new(Float64Array::from(vec![5.0, 1.0])),
            Arc::new(Int64Array::from(vec![115, 24])),
            Arc::new(Float64Array::from(vec![3.5, 0.8])),
            Arc::new(Float64Array::from(vec![100.0, 200.0])),
            Arc::new(Float64Array::from(vec![0.5, 0.1])),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let dataset = load_file(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        let rec = &dataset.records[1];
        assert_eq!(rec.platform, "LinkedIn");
        assert_eq!(rec.year, 2024);
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2024, 8, 30).unwrap());
        assert_eq!(rec.campaign_name, None);
        assert_eq!(rec.post_hour, 17);
        assert_eq!(rec.engagement, 24.0);
        assert!((rec.revenue_generated - 220.0).abs() < 1e-9);
        assert_eq!(dataset.records[0].campaign_name.as_deref(), Some("Launch"));
    }
}
