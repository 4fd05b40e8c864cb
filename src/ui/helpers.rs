// src/ui/helpers.rs
use crate::model::{FeedbackTone, QuizOption, Verdict};
use egui::{Button, Color32, RichText, Ui, Vec2};

const CORRECT_FILL: Color32 = Color32::from_rgb(46, 125, 50);
const INCORRECT_FILL: Color32 = Color32::from_rgb(183, 28, 28);
const SELECTED_FILL: Color32 = Color32::from_rgb(25, 90, 160);

pub fn verdict_fill(opt: &QuizOption) -> Option<Color32> {
    match opt.verdict {
        Verdict::Correct => Some(CORRECT_FILL),
        Verdict::Incorrect => Some(INCORRECT_FILL),
        Verdict::None if opt.selected => Some(SELECTED_FILL),
        Verdict::None => None,
    }
}

pub fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "  ✅",
        Verdict::Incorrect => "  ❌",
        Verdict::None => "",
    }
}

/// Botón de opción; devuelve true si se pulsó. Las opciones bloqueadas salen deshabilitadas.
pub fn option_button(ui: &mut Ui, opt: &QuizOption, width: f32, height: f32) -> bool {
    let label = format!("{}. {}{}", opt.letter, opt.text, verdict_marker(opt.verdict));
    let mut button = Button::new(label)
        .min_size(Vec2::new(width, height))
        .selected(opt.selected);
    if let Some(fill) = verdict_fill(opt) {
        button = button.fill(fill);
    }
    ui.add_enabled(!opt.locked, button).clicked()
}

pub fn feedback_text(text: &str, tone: FeedbackTone) -> RichText {
    let rich = RichText::new(text);
    match tone {
        FeedbackTone::Correct => rich.color(CORRECT_FILL),
        FeedbackTone::Incorrect => rich.color(INCORRECT_FILL),
        FeedbackTone::Neutral => rich,
    }
}
