pub mod app;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::QuizController;
pub use ui::QuizWidget;
