mod chart;
mod controls;
mod map;
mod table;

use eframe::egui;
use flare_core::{AppViewModel, Msg, RecordsView};

/// Draws the whole dashboard from the view model. UI events are collected as
/// messages in `intents`; nothing here mutates state directly.
pub fn render(ui: &mut egui::Ui, view: &AppViewModel, intents: &mut Vec<Msg>) {
    ui.heading("Oil and Gas Flare Data");
    ui.add_space(6.0);
    controls::draw(ui, view, intents);
    ui.add_space(8.0);

    match &view.records {
        RecordsView::Loading => {
            ui.label("Loading...");
        }
        RecordsView::Failed(message) => {
            ui.colored_label(egui::Color32::RED, format!("Error: {message}"));
        }
        RecordsView::Ready(table_view) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    columns[0].group(|ui| {
                        ui.strong("Flare Volume Over Time");
                        chart::draw(ui, &table_view.filtered);
                    });
                    columns[1].group(|ui| {
                        ui.strong("Flare Locations");
                        map::draw(ui, &table_view.filtered);
                    });
                });
                ui.add_space(8.0);
                ui.strong("Flare Data");
                table::draw(ui, table_view, intents);
            });
        }
    }
}
