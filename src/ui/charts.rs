use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::{ACCENT_GREEN, ACCENT_ORANGE, ACCENT_PURPLE, ACCENT_RED};
use crate::data::aggregate::{CampaignSummary, ContentPerformance};
use crate::state::DashboardState;
use crate::ui::cards::{best_hour_label, best_platform_label};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Mean engagement rate per platform and the winner.
pub fn engagement_tab(ui: &mut Ui, state: &DashboardState) {
    let eng = &state.result.platform_engagement;
    if eng.rows.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = eng.rows.iter().map(|r| r.platform.clone()).collect();
    let values: Vec<f64> = eng.rows.iter().map(|r| r.mean_engagement_rate).collect();
    category_bar_chart(ui, "platform_engagement", "Engagement rate (%)", &labels, &values, |i| {
        state.platform_colors.color_for(&labels[i])
    });

    success_banner(ui, &best_platform_label(eng.best_platform.as_deref()));
}

/// Mean interaction counts per content type.
pub fn content_tab(ui: &mut Ui, state: &DashboardState) {
    let perf = &state.result.content_performance;
    if perf.is_empty() {
        no_data(ui);
        return;
    }

    metrics_table(
        ui,
        "content_table",
        &["Content type", "Likes", "Comments", "Shares", "Engagement"],
        &content_rows(perf),
    );
    ui.add_space(12.0);

    let labels: Vec<String> = perf.iter().map(|r| r.content_type.clone()).collect();
    let values: Vec<f64> = perf.iter().map(|r| r.engagement).collect();
    category_bar_chart(ui, "content_engagement", "Mean engagement", &labels, &values, |i| {
        state.content_colors.color_for(&labels[i])
    });
}

/// Spend, revenue and ROI per campaign.
pub fn campaign_tab(ui: &mut Ui, state: &DashboardState) {
    let campaigns = &state.result.campaigns;
    if campaigns.is_empty() {
        no_data(ui);
        return;
    }

    metrics_table(
        ui,
        "campaign_table",
        &["Campaign", "Ad spend", "Revenue generated", "ROI"],
        &campaign_rows(campaigns),
    );
    ui.add_space(12.0);

    let labels: Vec<String> = campaigns.iter().map(|c| c.campaign_name.clone()).collect();
    let revenue: Vec<f64> = campaigns.iter().map(|c| c.revenue_generated).collect();
    let roi: Vec<f64> = campaigns.iter().map(|c| c.roi).collect();

    ui.strong("Mean revenue generated");
    category_bar_chart(ui, "campaign_revenue", "Revenue (₹)", &labels, &revenue, |_| ACCENT_RED);
    ui.strong("Mean ROI");
    category_bar_chart(ui, "campaign_roi", "ROI", &labels, &roi, |_| ACCENT_ORANGE);
}

/// Mean engagement by posting hour and the best hour.
pub fn best_time_tab(ui: &mut Ui, state: &DashboardState) {
    let hourly = &state.result.hourly;
    if hourly.rows.is_empty() {
        no_data(ui);
        return;
    }

    let series: Vec<[f64; 2]> = hourly
        .rows
        .iter()
        .map(|r| [f64::from(r.post_hour), r.mean_engagement])
        .collect();

    Plot::new("hourly_engagement")
        .height(CHART_HEIGHT)
        .x_axis_label("Post hour")
        .y_axis_label("Mean engagement")
        .include_x(0.0)
        .include_x(23.0)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(series.clone()))
                    .color(ACCENT_PURPLE)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(series)).radius(4.0).color(ACCENT_PURPLE));
        });

    success_banner(ui, &best_hour_label(hourly.best_hour));
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn no_data(ui: &mut Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("No posts match the current filters.").italics());
    });
}

fn success_banner(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    egui::Frame::default()
        .fill(ACCENT_GREEN.gamma_multiply(0.25))
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        });
}

/// One bar per category, labelled on the x axis by category name.
fn category_bar_chart(
    ui: &mut Ui,
    id: &str,
    y_label: &str,
    labels: &[String],
    values: &[f64],
    color: impl Fn(usize) -> Color32,
) {
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Bar::new(i as f64, v)
                .name(&labels[i])
                .fill(color(i))
                .width(0.6)
        })
        .collect();

    let axis_labels = labels.to_vec();
    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| axis_label(&axis_labels, mark.value))
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Category name for an x-axis grid mark; bars sit on integer positions, so
/// marks in between stay blank.
pub fn axis_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 || (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn metrics_table(ui: &mut Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(220.0)
            .columns(Column::auto().at_least(110.0), headers.len())
            .header(22.0, |mut header| {
                for title in headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(20.0, |mut table_row| {
                        for cell in row {
                            table_row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

pub fn content_rows(perf: &[ContentPerformance]) -> Vec<Vec<String>> {
    perf.iter()
        .map(|r| {
            vec![
                r.content_type.clone(),
                format!("{:.2}", r.likes),
                format!("{:.2}", r.comments),
                format!("{:.2}", r.shares),
                format!("{:.2}", r.engagement),
            ]
        })
        .collect()
}

pub fn campaign_rows(campaigns: &[CampaignSummary]) -> Vec<Vec<String>> {
    campaigns
        .iter()
        .map(|c| {
            vec![
                c.campaign_name.clone(),
                format!("₹ {:.2}", c.ad_spend),
                format!("₹ {:.2}", c.revenue_generated),
                format!("{:.2}", c.roi),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ns: &[&str]) -> Vec<String> {
        ns.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn axis_labels_only_on_bar_positions() {
        let labels = names(&["Facebook", "Instagram", "TikTok"]);
        assert_eq!(axis_label(&labels, 0.0), "Facebook");
        assert_eq!(axis_label(&labels, 2.0), "TikTok");
        assert_eq!(axis_label(&labels, 0.5), "");
        assert_eq!(axis_label(&labels, -1.0), "");
        assert_eq!(axis_label(&labels, 3.0), "");
    }

    #[test]
    fn table_rows_are_formatted_per_column() {
        let rows = campaign_rows(&[CampaignSummary {
            campaign_name: "Spring".into(),
            ad_spend: 200.0,
            revenue_generated: 240.004,
            roi: 0.2,
        }]);
        assert_eq!(rows, vec![names(&["Spring", "₹ 200.00", "₹ 240.00", "0.20"])]);

        let rows = content_rows(&[ContentPerformance {
            content_type: "Reel".into(),
            likes: 75.0,
            comments: 15.5,
            shares: 2.0,
            engagement: 92.5,
        }]);
        assert_eq!(rows[0], names(&["Reel", "75.00", "15.50", "2.00", "92.50"]));
    }
}
