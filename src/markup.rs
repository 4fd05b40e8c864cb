// src/markup.rs

use crate::error::MarkupError;
use crate::model::{Card, CardId, CardStatus, Feedback, QuizOption, SubmitControl};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionMarkup {
    pub letter: String,
    #[serde(default)]
    pub text: String,
}

/// Contenido estático de una tarjeta, tal y como lo aporta el documento.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardMarkup {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<OptionMarkup>,
    #[serde(default)]
    pub correct: String,
    #[serde(default)]
    pub correct_message: String,
    #[serde(default)]
    pub wrong_message: String,
    #[serde(default = "default_true")]
    pub feedback: bool,
    #[serde(default = "default_true")]
    pub submit: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizMarkup {
    #[serde(default)]
    pub cards: Vec<CardMarkup>,
}

impl QuizMarkup {
    /// Construye las tarjetas en orden de documento. Se llama una sola vez al crear el controlador.
    pub fn into_cards(self) -> Vec<Card> {
        let total = self.cards.len();
        self.cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| Card {
                id: CardId(index),
                prompt: card.prompt,
                options: card
                    .options
                    .into_iter()
                    .map(|opt| QuizOption::new(opt.letter, opt.text))
                    .collect(),
                feedback: card.feedback.then(Feedback::default),
                submit: card.submit.then(SubmitControl::default),
                correct_letter: card.correct,
                correct_message: card.correct_message,
                wrong_message: card.wrong_message,
                is_last: index + 1 == total,
                status: CardStatus::Unanswered,
                active: false,
                selected: None,
            })
            .collect()
    }
}

pub fn parse_markup(source: &str) -> Result<QuizMarkup, MarkupError> {
    // Un documento vacío es un quiz sin tarjetas
    if source.trim().is_empty() {
        return Ok(QuizMarkup::default());
    }
    Ok(serde_yaml::from_str(source)?)
}

pub fn read_markup_file(path: &Path) -> Result<QuizMarkup, MarkupError> {
    let content = std::fs::read_to_string(path)?;
    parse_markup(&content)
}

/// Carga el quiz embebido en el binario
pub fn read_cards_embedded() -> QuizMarkup {
    let file_content = include_str!("data/quiz_cards.yaml");
    match parse_markup(file_content) {
        Ok(markup) => markup,
        Err(e) => {
            log::error!("El quiz embebido no se pudo parsear: {e}");
            QuizMarkup::default()
        }
    }
}
