// src/web.rs
use crate::app::{HostEvent, QuizController};
use crate::config::{CANVAS_ID, DEFAULT_LOG_LEVEL};
use crate::markup::read_cards_embedded;
use crate::ui::QuizWidget;
use std::sync::mpsc::{Sender, channel};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Arranca el quiz en el canvas de la página y se suscribe a `pageshow`.
pub fn start() {
    if let Err(e) = eframe::WebLogger::init(DEFAULT_LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger: {e}").into());
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = find_canvas() else {
            log::error!("No se encontró el canvas #{CANVAS_ID}");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let (tx, rx) = channel();
                    listen_page_show(tx, cc.egui_ctx.clone());
                    let controller = QuizController::new(read_cards_embedded());
                    Ok(Box::new(QuizWidget::new(controller).with_host_events(rx)))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar el quiz: {e:?}");
        }
    });
}

fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into()
        .ok()
}

fn listen_page_show(events: Sender<HostEvent>, ctx: egui::Context) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_page_show = Closure::<dyn FnMut(web_sys::PageTransitionEvent)>::new(
        move |event: web_sys::PageTransitionEvent| {
            let _ = events.send(HostEvent::PageShow {
                persisted: event.persisted(),
            });
            ctx.request_repaint();
        },
    );

    if let Err(e) = window
        .add_event_listener_with_callback("pageshow", on_page_show.as_ref().unchecked_ref())
    {
        log::warn!("No se pudo escuchar pageshow: {e:?}");
    }
    // Vive lo mismo que la página
    on_page_show.forget();
}
