use eframe::egui;

/// Inline drag control placed above a chart so each plot can be resized
/// at runtime.
pub fn height_control(ui: &mut egui::Ui, height: &mut f32, label: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).weak());
        ui.add(
            egui::DragValue::new(height)
                .speed(2.0)
                .range(120.0..=600.0)
                .suffix(" px"),
        );
    });
    ui.add_space(2.0);
}
