use super::*;
use crate::app::actions::SubmitOutcome;
use crate::model::{CardId, GOOD_JOB_LABEL};

impl QuizController {
    /// Muestra exactamente la tarjeta `index`. Fuera de rango (o sin tarjetas) no hace nada.
    pub fn activate_card(&mut self, index: usize) {
        if index >= self.cards.len() {
            log::debug!("activate_card({index}) ignorado: hay {} tarjetas", self.cards.len());
            return;
        }

        for (idx, card) in self.cards.iter_mut().enumerate() {
            card.active = idx == index;
        }
        self.active = Some(index);
    }

    /// Segundo click en la última tarjeta: primero "Good Job!", después reinicio completo.
    pub(crate) fn finish_quiz(&mut self, last: CardId) -> SubmitOutcome {
        if self.reset_ready {
            self.reset_ready = false;
            log::info!("Quiz terminado: reiniciando");
            self.reset_all();
            return SubmitOutcome::Reset;
        }

        self.reset_ready = true;
        if let Some(submit) = self.cards.get_mut(last.0).and_then(|c| c.submit.as_mut()) {
            submit.label = GOOD_JOB_LABEL.to_string();
        }
        log::info!("Quiz completado");
        SubmitOutcome::AwaitingReset
    }
}
