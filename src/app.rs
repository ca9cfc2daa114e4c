use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::ACCENT_BLUE;
use crate::data::model::Dataset;
use crate::state::{DashboardState, DashboardTab};
use crate::ui::{cards, charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: DashboardState,
}

impl DashboardApp {
    pub fn new(dataset: Arc<Dataset>, source: PathBuf) -> Self {
        let mut state = DashboardState::default();
        state.set_dataset(dataset, source);
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new("Social Media Engagement Analytics").weak());
            });
        });

        // ---- Central panel: KPIs and tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            header(ui);
            cards::kpi_row(ui, &self.state.result.kpis);
            ui.add_space(12.0);
            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                for tab in DashboardTab::ALL {
                    ui.selectable_value(&mut self.state.active_tab, tab, tab.label());
                }
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| match self.state.active_tab {
                    DashboardTab::Engagement => charts::engagement_tab(ui, &self.state),
                    DashboardTab::Content => charts::content_tab(ui, &self.state),
                    DashboardTab::CampaignRoi => charts::campaign_tab(ui, &self.state),
                    DashboardTab::BestTime => charts::best_time_tab(ui, &self.state),
                });
        });
    }
}

fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("🚀 Social Media Analytics Pro Dashboard")
                .size(28.0)
                .strong()
                .color(ACCENT_BLUE),
        );
        ui.label(RichText::new("Engagement • Content • Campaign ROI • Revenue • Best Posting Time").weak());
    });
    ui.add_space(12.0);
}
