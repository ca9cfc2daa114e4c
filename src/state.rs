use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::CategoryColors;
use crate::data::aggregate::{self, FilteredResult};
use crate::data::cache::DatasetCache;
use crate::data::filter::{toggle, Dimension, FilterSelection};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Dashboard tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Engagement,
    Content,
    CampaignRoi,
    BestTime,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Engagement,
        DashboardTab::Content,
        DashboardTab::CampaignRoi,
        DashboardTab::BestTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Engagement => "📱 Engagement",
            DashboardTab::Content => "🖼 Content",
            DashboardTab::CampaignRoi => "💰 Campaign ROI",
            DashboardTab::BestTime => "⏰ Best Time",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
///
/// The dataset is shared and never mutated; the selection and the derived
/// result belong to this session only.
#[derive(Default)]
pub struct DashboardState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Arc<Dataset>>,

    /// Where `dataset` came from.
    pub source: Option<PathBuf>,

    /// Current platform / content type / year selection.
    pub selection: FilterSelection,

    /// Aggregates for `selection`, recomputed on every change.
    pub result: FilteredResult,

    pub active_tab: DashboardTab,

    /// Bar colours keyed by the full dataset's values.
    pub platform_colors: CategoryColors,
    pub content_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Ingest a newly loaded dataset with every filter value selected.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>, source: PathBuf) {
        self.selection = FilterSelection::all(&dataset);
        self.platform_colors = CategoryColors::new(&dataset.platforms);
        self.content_colors = CategoryColors::new(&dataset.content_types);
        self.dataset = Some(dataset);
        self.source = Some(source);
        self.status_message = None;
        self.recompute();
    }

    /// Load `path` through `cache` and show it; on failure keep the current
    /// dataset and report the error in the status bar.
    pub fn open(&mut self, path: &Path, cache: &DatasetCache) {
        match cache.get_or_load(path) {
            Ok(dataset) => self.set_dataset(dataset, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Replace the selection and recompute if it actually changed.
    pub fn on_filter_change(&mut self, selection: FilterSelection) {
        if selection != self.selection {
            self.selection = selection;
            self.recompute();
        }
    }

    /// Rebuild `result` from scratch for the current selection.
    pub fn recompute(&mut self) {
        self.result = match &self.dataset {
            Some(ds) => aggregate::run(ds, &self.selection),
            None => FilteredResult::default(),
        };
        log::debug!(
            "Recomputed dashboard: {} of {} posts visible",
            self.result.visible_indices.len(),
            self.dataset.as_ref().map_or(0, |ds| ds.len())
        );
    }

    pub fn toggle_platform(&mut self, platform: &str) {
        let mut next = self.selection.clone();
        toggle(&mut next.platforms, platform.to_string());
        self.on_filter_change(next);
    }

    pub fn toggle_content_type(&mut self, content_type: &str) {
        let mut next = self.selection.clone();
        toggle(&mut next.content_types, content_type.to_string());
        self.on_filter_change(next);
    }

    pub fn toggle_year(&mut self, year: i32) {
        let mut next = self.selection.clone();
        toggle(&mut next.years, year);
        self.on_filter_change(next);
    }

    /// Select all values in one dimension.
    pub fn select_all(&mut self, dimension: Dimension) {
        if let Some(ds) = &self.dataset {
            let mut next = self.selection.clone();
            next.select_all(ds, dimension);
            self.on_filter_change(next);
        }
    }

    /// Deselect all values in one dimension.
    pub fn select_none(&mut self, dimension: Dimension) {
        let mut next = self.selection.clone();
        next.select_none(dimension);
        self.on_filter_change(next);
    }
}
