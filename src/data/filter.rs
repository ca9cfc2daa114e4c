use std::collections::BTreeSet;

use super::model::{Dataset, PostRecord};

// ---------------------------------------------------------------------------
// Filter selection: which values are selected per dimension
// ---------------------------------------------------------------------------

/// The three filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Platform,
    ContentType,
    Year,
}

/// Selected values for each dimension.
///
/// Unlike a "no constraint" default, an empty set here selects nothing: a
/// record must match all three sets to be visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub platforms: BTreeSet<String>,
    pub content_types: BTreeSet<String>,
    pub years: BTreeSet<i32>,
}

impl FilterSelection {
    /// Every distinct value selected (i.e., show everything).
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            platforms: dataset.platforms.clone(),
            content_types: dataset.content_types.clone(),
            years: dataset.years.clone(),
        }
    }

    /// Row-wise conjunction of the three membership tests.
    pub fn matches(&self, record: &PostRecord) -> bool {
        self.platforms.contains(&record.platform)
            && self.content_types.contains(&record.content_type)
            && self.years.contains(&record.year)
    }

    /// Whether any dimension has nothing selected, which empties the view.
    pub fn is_blocking(&self) -> bool {
        self.platforms.is_empty() || self.content_types.is_empty() || self.years.is_empty()
    }

    /// Select every value of `dimension` present in `dataset`.
    pub fn select_all(&mut self, dataset: &Dataset, dimension: Dimension) {
        match dimension {
            Dimension::Platform => self.platforms = dataset.platforms.clone(),
            Dimension::ContentType => self.content_types = dataset.content_types.clone(),
            Dimension::Year => self.years = dataset.years.clone(),
        }
    }

    /// Deselect every value of `dimension`.
    pub fn select_none(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Platform => self.platforms.clear(),
            Dimension::ContentType => self.content_types.clear(),
            Dimension::Year => self.years.clear(),
        }
    }
}

/// Add `value` if absent, remove it if present.
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of a dataset surviving a selection, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Indices into `dataset.records` of the visible rows.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a PostRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Restrict `dataset` to the records passing `selection`.
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = if selection.is_blocking() {
        Vec::new()
    } else {
        dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| selection.matches(rec))
            .map(|(i, _)| i)
            .collect()
    };

    FilteredView { dataset, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{post, three_rows};

    fn years(ys: &[i32]) -> BTreeSet<i32> {
        ys.iter().copied().collect()
    }

    #[test]
    fn full_selection_returns_whole_dataset() {
        let ds = three_rows();
        let view = apply(&ds, &FilterSelection::all(&ds));
        assert_eq!(view.indices(), &[0, 1, 2]);
    }

    #[test]
    fn year_filter_keeps_only_matching_rows() {
        let ds = three_rows();
        let mut sel = FilterSelection::all(&ds);
        sel.years = years(&[2023]);

        let view = apply(&ds, &sel);
        let revenue: Vec<f64> = view.records().map(|r| r.revenue_generated).collect();
        assert_eq!(view.len(), 2);
        assert_eq!(revenue[0], 150.0);
        assert!((revenue[1] - 220.0).abs() < 1e-9);
    }

    #[test]
    fn every_visible_row_matches_all_three_sets() {
        let ds = Dataset::from_records(vec![
            post("A", "Blog", 2023, 1.0, 0.0),
            post("A", "Video", 2023, 1.0, 0.0),
            post("B", "Blog", 2024, 1.0, 0.0),
            post("C", "Blog", 2023, 1.0, 0.0),
            post("A", "Blog", 2024, 1.0, 0.0),
        ]);
        let sel = FilterSelection {
            platforms: ["A", "B"].iter().map(|s| s.to_string()).collect(),
            content_types: ["Blog"].iter().map(|s| s.to_string()).collect(),
            years: years(&[2024]),
        };

        let view = apply(&ds, &sel);
        assert_eq!(view.indices(), &[2, 4]);
        assert!(view.records().all(|r| sel.matches(r)));
    }

    #[test]
    fn empty_dimension_empties_the_view() {
        let ds = three_rows();
        for dim in [Dimension::Platform, Dimension::ContentType, Dimension::Year] {
            let mut sel = FilterSelection::all(&ds);
            sel.select_none(dim);
            assert!(sel.is_blocking());
            assert!(apply(&ds, &sel).is_empty(), "{dim:?}");
        }
    }

    #[test]
    fn selecting_values_absent_from_data_yields_nothing() {
        let ds = three_rows();
        let mut sel = FilterSelection::all(&ds);
        sel.years = years(&[1999]);
        assert!(apply(&ds, &sel).is_empty());
    }

    #[test]
    fn apply_is_idempotent_and_leaves_revenue_untouched() {
        let ds = three_rows();
        let mut sel = FilterSelection::all(&ds);
        sel.platforms.remove("Platform B");

        let first = apply(&ds, &sel);
        let second = apply(&ds, &sel);
        assert_eq!(first.indices(), second.indices());
        for rec in &ds.records {
            assert_eq!(rec.revenue_generated, rec.ad_spend * (1.0 + rec.roi));
        }
    }

    #[test]
    fn select_all_restores_one_dimension() {
        let ds = three_rows();
        let mut sel = FilterSelection::default();
        sel.select_all(&ds, Dimension::Platform);
        assert_eq!(sel.platforms, ds.platforms);
        assert!(sel.content_types.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = years(&[2023]);
        toggle(&mut set, 2024);
        assert_eq!(set, years(&[2023, 2024]));
        toggle(&mut set, 2023);
        assert_eq!(set, years(&[2024]));
    }
}
