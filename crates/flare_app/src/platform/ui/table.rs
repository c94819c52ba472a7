use eframe::egui;
use egui_extras::{Column, TableBuilder};
use flare_core::{Msg, RecordTableView};

const HEADERS: [&str; 6] = ["Date", "Location", "Operator", "Volume", "Duration", "H2S"];

pub fn draw(ui: &mut egui::Ui, table_view: &RecordTableView, intents: &mut Vec<Msg>) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in table_view.page_rows() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(record.date.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.location.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.operator.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", record.volume));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", record.duration));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", record.h2s));
                    });
                });
            }
        });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(table_view.can_prev, egui::Button::new("Previous"))
            .clicked()
        {
            intents.push(Msg::PrevPageClicked);
        }
        if ui
            .add_enabled(table_view.can_next, egui::Button::new("Next"))
            .clicked()
        {
            intents.push(Msg::NextPageClicked);
        }
        ui.label(format!(
            "Page {} of {} ({} of {} records match)",
            table_view.page_index + 1,
            table_view.page_count,
            table_view.filtered.len(),
            table_view.total_count
        ));
    });
}
