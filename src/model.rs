// src/model.rs

use serde::{Deserialize, Serialize};

/// Texto inicial del botón de envío.
pub const SUBMIT_LABEL: &str = "Submit";
pub const NEXT_LABEL: &str = "Next Question";
pub const FINISH_LABEL: &str = "Finish Quiz";
pub const GOOD_JOB_LABEL: &str = "Good Job!";
pub const SELECT_PROMPT: &str = "Please select an option first.";

/// Posición 0-based de una tarjeta dentro del quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub usize);

/// Posición 0-based de una opción dentro de su tarjeta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OptionId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardStatus {
    #[default]
    Unanswered,
    Answered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    None,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackTone {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

impl FeedbackTone {
    pub fn from_outcome(is_correct: bool) -> Self {
        if is_correct {
            FeedbackTone::Correct
        } else {
            FeedbackTone::Incorrect
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOption {
    pub letter: String,
    pub text: String,
    pub selected: bool,
    pub locked: bool,
    pub verdict: Verdict,
}

impl QuizOption {
    pub fn new(letter: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            text: text.into(),
            selected: false,
            locked: false,
            verdict: Verdict::None,
        }
    }

    /// Quita la selección y el veredicto, sin tocar el bloqueo.
    pub fn clear_marks(&mut self) {
        self.selected = false;
        self.verdict = Verdict::None;
    }
}

/// Zona de feedback de una tarjeta.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: FeedbackTone,
}

impl Feedback {
    pub fn clear(&mut self) {
        self.text.clear();
        self.tone = FeedbackTone::Neutral;
    }

    pub fn show(&mut self, text: impl Into<String>, tone: FeedbackTone) {
        self.text = text.into();
        self.tone = tone;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub feedback: Option<Feedback>,
    pub submit: Option<SubmitControl>,
    pub correct_letter: String,
    pub correct_message: String,
    pub wrong_message: String,
    pub is_last: bool,
    pub status: CardStatus,
    pub active: bool,
    pub selected: Option<OptionId>,
}

impl Card {
    pub fn is_answered(&self) -> bool {
        self.status == CardStatus::Answered
    }

    pub fn option(&self, id: OptionId) -> Option<&QuizOption> {
        self.options.get(id.0)
    }

    /// Primera opción cuya letra coincide con la respuesta correcta.
    pub fn correct_option(&self) -> Option<OptionId> {
        self.options
            .iter()
            .position(|opt| opt.letter == self.correct_letter)
            .map(OptionId)
    }

    pub fn option_by_letter(&self, letter: &str) -> Option<OptionId> {
        self.options
            .iter()
            .position(|opt| opt.letter == letter)
            .map(OptionId)
    }

    pub fn message_for(&self, is_correct: bool) -> &str {
        if is_correct {
            &self.correct_message
        } else {
            &self.wrong_message
        }
    }
}
