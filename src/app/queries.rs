use super::*;
use crate::model::CardId;

impl QuizController {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.active.and_then(|idx| self.cards.get(idx))
    }

    /// Cuántas tarjetas están visibles; 1 salvo en un quiz vacío.
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|c| c.active).count()
    }

    pub fn is_reset_ready(&self) -> bool {
        self.reset_ready
    }

    pub fn submit_label(&self, id: CardId) -> Option<&str> {
        self.card(id)
            .and_then(|c| c.submit.as_ref())
            .map(|s| s.label.as_str())
    }
}
