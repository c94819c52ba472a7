use eframe::egui;
use flare_core::{AppViewModel, Msg};

pub fn draw(ui: &mut egui::Ui, view: &AppViewModel, intents: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        let mut term = view.search_term.clone();
        let search = egui::TextEdit::singleline(&mut term)
            .hint_text("Search by location or operator...")
            .desired_width(280.0);
        if ui.add(search).changed() {
            intents.push(Msg::SearchChanged(term));
        }

        let scrape_label = if view.start_pending {
            "Starting..."
        } else if view.is_running {
            "Scraping..."
        } else {
            "Scrape New Data"
        };
        let can_start = !view.is_running && !view.start_pending;
        if ui
            .add_enabled(can_start, egui::Button::new(scrape_label))
            .clicked()
        {
            intents.push(Msg::ScrapeClicked);
        }

        let stop_label = if view.stop_pending { "Stopping..." } else { "Stop" };
        if ui
            .add_enabled(view.is_running, egui::Button::new(stop_label))
            .clicked()
        {
            intents.push(Msg::StopClicked);
        }
    });

    let status = if view.is_running {
        format!("Scrape running: {} rows processed", view.rows_processed)
    } else if view.rows_processed > 0 {
        format!("Idle: {} rows processed in the last run", view.rows_processed)
    } else {
        "Idle".to_string()
    };
    ui.label(status);

    if let Some(error) = &view.error {
        ui.colored_label(egui::Color32::RED, error.as_str());
    }
}
