//! Controls panel UI: indicator and display mode selection.
//!
//! Mutates the parent-owned selections directly; the visualization
//! re-renders from the updated state on the next frame.

use crate::state::{AggregationType, AppState, BoundaryLevel, DisplaySettings};
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_controls_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("controls_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Controls");
                ui.separator();

                let before = (
                    state.viz_state.agg_type,
                    state.viz_state.bound_level,
                    state.viz_state.use_per_capita,
                );

                render_indicator_section(ui, state);
                ui.add_space(5.0);

                render_display_section(ui, state);

                let after = (
                    state.viz_state.agg_type,
                    state.viz_state.bound_level,
                    state.viz_state.use_per_capita,
                );
                if before != after {
                    DisplaySettings {
                        agg_type: after.0,
                        bound_level: after.1,
                        use_per_capita: after.2,
                    }
                    .save();
                }
            });
        });
}

fn render_indicator_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Indicator").strong())
        .default_open(true)
        .show(ui, |ui| {
            let Some(config) = &state.config else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading catalog...");
                });
                return;
            };

            let selected_label = config
                .indicator(&state.viz_state.indicator)
                .map(|i| i.label.as_str())
                .unwrap_or(state.viz_state.indicator.as_str());

            egui::ComboBox::from_id_salt("indicator_selector")
                .selected_text(selected_label)
                .width(160.0)
                .show_ui(ui, |ui| {
                    for indicator in &config.indicators {
                        ui.selectable_value(
                            &mut state.viz_state.indicator,
                            indicator.id.clone(),
                            &indicator.label,
                        );
                    }
                });
        });
}

fn render_display_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Display").strong())
        .default_open(true)
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt("agg_selector")
                .selected_text(state.viz_state.agg_type.label())
                .width(160.0)
                .show_ui(ui, |ui| {
                    for agg in AggregationType::all() {
                        ui.selectable_value(&mut state.viz_state.agg_type, *agg, agg.label());
                    }
                });

            egui::ComboBox::from_id_salt("boundary_selector")
                .selected_text(state.viz_state.bound_level.label())
                .width(160.0)
                .show_ui(ui, |ui| {
                    for level in BoundaryLevel::all() {
                        ui.selectable_value(
                            &mut state.viz_state.bound_level,
                            *level,
                            level.label(),
                        );
                    }
                });

            ui.checkbox(&mut state.viz_state.use_per_capita, "Per 100k population");
        });
}
