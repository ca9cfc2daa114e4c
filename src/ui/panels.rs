use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::cache::DatasetCache;
use crate::data::filter::Dimension;
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// What the user did inside one filter group this frame.
enum GroupAction {
    All,
    None,
    Toggle(usize),
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("🎛 Dashboard Controls");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let platforms: Vec<String> = dataset.platforms.iter().cloned().collect();
    let content_types: Vec<String> = dataset.content_types.iter().cloned().collect();
    let years: Vec<i32> = dataset.years.iter().copied().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let selected: Vec<bool> = platforms
                .iter()
                .map(|p| state.selection.platforms.contains(p))
                .collect();
            match filter_group(ui, "📱 Platform", &platforms, &selected) {
                Some(GroupAction::All) => state.select_all(Dimension::Platform),
                Some(GroupAction::None) => state.select_none(Dimension::Platform),
                Some(GroupAction::Toggle(i)) => state.toggle_platform(&platforms[i]),
                None => {}
            }

            let selected: Vec<bool> = content_types
                .iter()
                .map(|c| state.selection.content_types.contains(c))
                .collect();
            match filter_group(ui, "🖼 Content Type", &content_types, &selected) {
                Some(GroupAction::All) => state.select_all(Dimension::ContentType),
                Some(GroupAction::None) => state.select_none(Dimension::ContentType),
                Some(GroupAction::Toggle(i)) => state.toggle_content_type(&content_types[i]),
                None => {}
            }

            let labels: Vec<String> = years.iter().map(i32::to_string).collect();
            let selected: Vec<bool> = years
                .iter()
                .map(|y| state.selection.years.contains(y))
                .collect();
            match filter_group(ui, "📅 Year", &labels, &selected) {
                Some(GroupAction::All) => state.select_all(Dimension::Year),
                Some(GroupAction::None) => state.select_none(Dimension::Year),
                Some(GroupAction::Toggle(i)) => state.toggle_year(years[i]),
                None => {}
            }
        });
}

/// One collapsible multi-select.  Returns at most one action per frame; the
/// caller turns it into a selection change.
fn filter_group(ui: &mut Ui, title: &str, labels: &[String], selected: &[bool]) -> Option<GroupAction> {
    let n_selected = selected.iter().filter(|s| **s).count();
    let header_text = format!("{title}  ({n_selected}/{})", labels.len());
    let mut action = None;

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    action = Some(GroupAction::All);
                }
                if ui.small_button("None").clicked() {
                    action = Some(GroupAction::None);
                }
            });

            for (i, (label, is_selected)) in labels.iter().zip(selected).enumerate() {
                let mut checked = *is_selected;
                if ui.checkbox(&mut checked, label.as_str()).changed() {
                    action = Some(GroupAction::Toggle(i));
                }
            }
        });

    action
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} posts loaded, {} visible",
                ds.len(),
                state.result.visible_indices.len()
            ));
            if state.result.is_empty() {
                ui.label(RichText::new("(no posts match the filters)").weak());
            }
        }
        if let Some(name) = state.source.as_ref().and_then(|p| p.file_name()) {
            ui.separator();
            ui.label(RichText::new(name.to_string_lossy()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut DashboardState) {
    let file = rfd::FileDialog::new()
        .set_title("Open post data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path, DatasetCache::global());
    }
}
