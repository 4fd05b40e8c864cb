// src/config.rs

use crate::markup::{QuizMarkup, read_cards_embedded, read_markup_file};
use std::path::PathBuf;

/// Variable de entorno con la ruta de un YAML externo.
pub const MARKUP_ENV: &str = "HOW_WELL_QUIZ_MARKUP";
pub const CANVAS_ID: &str = "the_canvas_id";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizConfig {
    pub markup_path: Option<PathBuf>,
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(MARKUP_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let markup_path = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { markup_path }
    }

    /// Devuelve el markup configurado; si el fichero externo falla, vuelve al embebido.
    pub fn load_markup(&self) -> QuizMarkup {
        let Some(path) = &self.markup_path else {
            return read_cards_embedded();
        };
        match read_markup_file(path) {
            Ok(markup) => {
                log::info!("Quiz cargado desde {}", path.display());
                markup
            }
            Err(e) => {
                log::warn!(
                    "No se pudo cargar {} ({e}); usando el quiz embebido",
                    path.display()
                );
                read_cards_embedded()
            }
        }
    }
}
