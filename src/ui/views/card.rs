use crate::app::QuizController;
use crate::model::OptionId;
use crate::ui::helpers::{feedback_text, option_button};
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Vec2};

pub fn ui_card(app: &mut QuizController, ctx: &Context) {
    let mut clicked_option = None;
    let mut clicked_submit = false;

    let Some(card) = app.active_card() else {
        centered_panel(ctx, 60.0, 650.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("This quiz has no questions.");
            });
        });
        return;
    };
    let card_id = card.id;

    let est_height = 120.0 + card.options.len() as f32 * 44.0;
    centered_panel(ctx, est_height, 650.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading(&card.prompt);
            ui.add_space(12.0);

            for (idx, opt) in card.options.iter().enumerate() {
                if option_button(ui, opt, width, 36.0) {
                    clicked_option = Some(OptionId(idx));
                }
                ui.add_space(4.0);
            }

            ui.add_space(8.0);
            if let Some(feedback) = &card.feedback {
                if !feedback.text.is_empty() {
                    ui.label(feedback_text(&feedback.text, feedback.tone));
                    ui.add_space(8.0);
                }
            }

            if let Some(submit) = &card.submit {
                let button = Button::new(RichText::new(&submit.label).strong())
                    .min_size(Vec2::new(width / 2.0, 40.0));
                if ui.add_enabled(!submit.disabled, button).clicked() {
                    clicked_submit = true;
                }
            }
        });
    });

    // Los clicks se aplican cuando ya no se está pintando la tarjeta
    if let Some(option_id) = clicked_option {
        app.on_option_activated(card_id, option_id);
    }
    if clicked_submit {
        app.on_submit_activated(card_id);
    }
}
