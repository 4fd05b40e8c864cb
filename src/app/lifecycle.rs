use super::*;

/// Eventos de ciclo de vida que entrega la página anfitriona.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// `persisted` es true cuando la página vuelve de la caché de navegación.
    PageShow { persisted: bool },
}

impl QuizController {
    pub fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::PageShow { persisted: true } => self.page_restored(),
            HostEvent::PageShow { persisted: false } => {}
        }
    }

    /// El DOM restaurado puede traer estado viejo: siempre se reinicia.
    pub fn page_restored(&mut self) {
        log::info!("Página restaurada desde caché: reiniciando el quiz");
        self.reset_all();
    }
}
