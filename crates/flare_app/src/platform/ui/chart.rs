use eframe::egui;
use flare_core::Record;

const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0x84, 0xd8);
const MAX_BARS: usize = 120;

/// Bar chart of flare volume per record, in collection order.
pub fn draw(ui: &mut egui::Ui, records: &[Record]) {
    let desired = egui::vec2(ui.available_width(), 200.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;

    if records.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No records",
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let max_volume = records
        .iter()
        .map(|record| record.volume)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);
    let count = records.len().min(MAX_BARS);
    let bar_width = rect.width() / count as f32;

    for (index, record) in records.iter().take(count).enumerate() {
        let height = ((record.volume / max_volume) as f32) * (rect.height() - 4.0);
        let left = rect.left() + index as f32 * bar_width;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left + 1.0, rect.bottom() - height),
            egui::pos2(left + bar_width.max(3.0) - 1.0, rect.bottom()),
        );
        painter.rect_filled(bar, 0.0, BAR_COLOR);
    }
}
