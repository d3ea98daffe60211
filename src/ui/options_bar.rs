//! Options bar UI: selected indicator readout and date selection.

use super::colors;
use super::visualization::OptionsBarProps;
use chrono::NaiveDate;
use eframe::egui::{self, RichText};

/// Renders the options row from its props. Returns the newly selected
/// date when the user picks one; props are never mutated.
pub fn render_options_bar(ui: &mut egui::Ui, props: &OptionsBarProps<'_>) -> Option<NaiveDate> {
    let mut selected: Option<NaiveDate> = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Indicator:")
                .size(12.0)
                .color(colors::ui::LABEL),
        );
        ui.label(RichText::new(props.indicator).strong());

        ui.separator();

        if props.dates.is_empty() {
            ui.label(RichText::new("No dates available").color(colors::ui::LABEL));
            return;
        }

        let max_index = props.dates.len() - 1;
        let mut index = props
            .dates
            .iter()
            .position(|d| *d == props.active_date)
            .unwrap_or(max_index);

        if ui
            .add_enabled(index > 0, egui::Button::new("\u{25c0}"))
            .clicked()
        {
            index -= 1;
        }

        ui.add(
            egui::Slider::new(&mut index, 0..=max_index)
                .show_value(false)
                .text("Date"),
        );

        if ui
            .add_enabled(index < max_index, egui::Button::new("\u{25b6}"))
            .clicked()
        {
            index += 1;
        }

        ui.label(
            RichText::new(props.active_date.format("%b %d, %Y").to_string())
                .monospace()
                .color(colors::ui::VALUE),
        );

        let picked = props.dates[index];
        if picked != props.active_date {
            selected = Some(picked);
        }
    });

    selected
}
