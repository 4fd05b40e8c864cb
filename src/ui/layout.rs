
use crate::app::QuizController;
use egui::{CentralPanel, Context, Frame, Ui, Visuals};

pub fn progress_caption(controller: &QuizController) -> String {
    match controller.active_index() {
        Some(idx) => format!("Question {} of {}", idx + 1, controller.len()),
        None => String::new(),
    }
}

pub fn bottom_panel(ctx: &Context, controller: &QuizController) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(progress_caption(controller));

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("🌙 Dark").clicked() {
                        ctx.set_visuals(Visuals::dark());
                    }
                    if ui.button("☀ Light").clicked() {
                        ctx.set_visuals(Visuals::light());
                    }
                },
            );
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
