use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::{ACCENT_BLUE, ACCENT_GREEN, ACCENT_ORANGE, ACCENT_PURPLE, ACCENT_RED};
use crate::data::aggregate::KpiSummary;

/// Shown wherever a mean or argmax has no rows to work with.
pub const NO_DATA: &str = "no data";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Whole number, truncated toward zero.
pub fn format_count(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

pub fn format_currency(value: f64) -> String {
    format!("₹ {}", value.trunc() as i64)
}

pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}%"))
}

pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}"))
}

pub fn best_platform_label(platform: Option<&str>) -> String {
    format!("🏆 Best Platform: {}", platform.unwrap_or(NO_DATA))
}

pub fn best_hour_label(hour: Option<u8>) -> String {
    match hour {
        Some(h) => format!("🔥 Best Posting Time: {h}:00 hrs"),
        None => format!("🔥 Best Posting Time: {NO_DATA}"),
    }
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub accent: Color32,
}

/// The five headline cards, left to right.
pub fn kpi_cards(kpis: &KpiSummary) -> [KpiCard; 5] {
    let card = |title, value, accent| KpiCard { title, value, accent };
    [
        card("Total Engagement", format_count(kpis.total_engagement), ACCENT_BLUE),
        card("Avg Engagement Rate", format_percent(kpis.avg_engagement_rate), ACCENT_GREEN),
        card("Ad Spend", format_currency(kpis.total_ad_spend), ACCENT_ORANGE),
        card("Revenue Generated", format_currency(kpis.total_revenue), ACCENT_RED),
        card("Avg ROI", format_ratio(kpis.avg_roi), ACCENT_PURPLE),
    ]
}

/// Render the KPI row across the full width.
pub fn kpi_row(ui: &mut Ui, kpis: &KpiSummary) {
    let cards = kpi_cards(kpis);
    ui.columns(cards.len(), |columns: &mut [Ui]| {
        for (ui, card) in columns.iter_mut().zip(cards.iter()) {
            egui::Frame::default()
                .fill(card.accent)
                .corner_radius(18.0)
                .inner_margin(14.0)
                .show(ui, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.label(RichText::new(card.title).color(Color32::WHITE).size(15.0));
                        ui.label(
                            RichText::new(&card.value)
                                .color(Color32::WHITE)
                                .size(24.0)
                                .strong(),
                        );
                    });
                });
        }
    });
}
