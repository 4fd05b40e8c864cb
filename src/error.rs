// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("no se pudo leer el markup del quiz: {0}")]
    Io(#[from] std::io::Error),
    #[error("markup YAML inválido: {0}")]
    Parse(#[from] serde_yaml::Error),
}
