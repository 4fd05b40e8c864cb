use crate::markup::QuizMarkup;
use crate::model::Card;

// Submódulos
pub mod actions;
pub mod lifecycle;
pub mod navigation;
pub mod queries;
pub mod resets;

pub use actions::SubmitOutcome;
pub use lifecycle::HostEvent;
pub use resets::Reset;

/// Estado de un quiz de tarjetas para una carga de página.
///
/// Es dueño de todas las tarjetas y sus opciones; nunca crea ni destruye
/// tarjetas después de construirse, sólo cambian sus campos de estado.
#[derive(Clone, Debug, Default)]
pub struct QuizController {
    cards: Vec<Card>,
    active: Option<usize>,
    // Confirmación del final: la última tarjeta ya mostró "Good Job!"
    reset_ready: bool,
}

impl QuizController {
    /// Descubre las tarjetas del markup (una sola vez) y deja el quiz limpio en la tarjeta 0.
    pub fn new(markup: QuizMarkup) -> Self {
        let cards = markup.into_cards();
        log::debug!("Quiz inicializado con {} tarjetas", cards.len());

        let mut controller = Self {
            cards,
            active: None,
            reset_ready: false,
        };
        controller.reset_all();
        controller
    }
}
