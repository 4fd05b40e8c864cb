use super::*;
use crate::model::{Card, CardStatus, Feedback, QuizOption, SubmitControl};

/// Vuelve un elemento a su estado inicial.
pub trait Reset {
    fn reset(&mut self);
}

impl Reset for QuizOption {
    fn reset(&mut self) {
        self.clear_marks();
        self.locked = false;
    }
}

impl Reset for Feedback {
    fn reset(&mut self) {
        self.clear();
    }
}

impl Reset for SubmitControl {
    fn reset(&mut self) {
        *self = SubmitControl::default();
    }
}

impl Reset for Card {
    fn reset(&mut self) {
        self.selected = None;
        self.status = CardStatus::Unanswered;
        self.active = false;

        for opt in &mut self.options {
            opt.reset();
        }

        if let Some(feedback) = self.feedback.as_mut() {
            feedback.reset();
        }

        if let Some(submit) = self.submit.as_mut() {
            submit.reset();
        }
    }
}

impl QuizController {
    /// Reinicia todas las tarjetas y vuelve a mostrar la primera.
    pub fn reset_all(&mut self) {
        for card in &mut self.cards {
            card.reset();
        }
        self.reset_ready = false;
        self.active = None;

        if !self.cards.is_empty() {
            self.activate_card(0);
        }
        log::debug!("Quiz reiniciado");
    }
}
