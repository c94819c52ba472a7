use eframe::egui;
use flare_core::Record;

const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0xc6, 0x58);

/// Scatter of flare coordinates. Records without usable coordinates are
/// skipped, mirroring the source data's habit of reporting (0, 0).
pub fn draw(ui: &mut egui::Ui, records: &[Record]) {
    let desired = egui::vec2(ui.available_width(), 200.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    let located: Vec<&Record> = records
        .iter()
        .filter(|record| record.has_coordinates())
        .collect();
    if located.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No mappable records",
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    for record in &located {
        min_lat = min_lat.min(record.latitude);
        max_lat = max_lat.max(record.latitude);
        min_lon = min_lon.min(record.longitude);
        max_lon = max_lon.max(record.longitude);
    }
    // Keep a sensible span even when every marker shares one coordinate.
    let lat_span = (max_lat - min_lat).max(0.5);
    let lon_span = (max_lon - min_lon).max(0.5);

    let inner = rect.shrink(8.0);
    for record in located {
        let x = ((record.longitude - min_lon) / lon_span) as f32;
        // Latitude grows northward; screen y grows downward.
        let y = 1.0 - ((record.latitude - min_lat) / lat_span) as f32;
        let pos = egui::pos2(
            inner.left() + x * inner.width(),
            inner.top() + y * inner.height(),
        );
        painter.circle_filled(pos, 3.0, MARKER_COLOR);
    }
}
