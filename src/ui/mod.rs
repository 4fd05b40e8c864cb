mod helpers;
pub mod layout;
pub mod views;

use crate::app::{HostEvent, QuizController};
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::sync::mpsc::Receiver;

/// Documento anfitrión del quiz: pinta la tarjeta activa y reenvía los clicks al controlador.
pub struct QuizWidget {
    pub controller: QuizController,
    host_events: Option<Receiver<HostEvent>>,
}

impl QuizWidget {
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller,
            host_events: None,
        }
    }

    /// Eventos de la página (p. ej. `pageshow`) que llegan desde fuera del bucle de egui.
    pub fn with_host_events(mut self, events: Receiver<HostEvent>) -> Self {
        self.host_events = Some(events);
        self
    }

    /// Aplica los eventos pendientes en el orden en que llegaron.
    pub fn drain_host_events(&mut self) {
        let Some(events) = &self.host_events else {
            return;
        };
        for event in events.try_iter() {
            self.controller.handle_host_event(event);
        }
    }
}

impl App for QuizWidget {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.drain_host_events();

        // PANEL INFERIOR: progreso + tema
        bottom_panel(ctx, &self.controller);

        views::card::ui_card(&mut self.controller, ctx);
    }
}
