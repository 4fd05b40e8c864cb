#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use how_well_quiz::config::{DEFAULT_LOG_LEVEL, QuizConfig};
    use how_well_quiz::{QuizController, QuizWidget};

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL.as_str()),
    )
    .init();

    let config = QuizConfig::from_env();
    let controller = QuizController::new(config.load_markup());
    log::info!("Quiz listo con {} preguntas", controller.len());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "How Well Quiz",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizWidget::new(controller)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    how_well_quiz::web::start();
}
