//! Reconstrucción de estado histórico (replay) y filtrado de historial.
//!
//! El repositorio aplica un replay lineal: consume eventos en orden
//! ascendente de id y los pliega sobre una `ItemProjection` vacía con las
//! mismas reglas que la proyección viva. El fold es puro: mismo prefijo de
//! log, mismo resultado.
use log::debug;

use crate::event::ItemEvent;
use crate::projection::ItemProjection;

/// Trait para reconstruir (`replay`) estado e historial a partir de eventos.
pub trait StateRepository {
    /// Pliega `events` hasta e incluyendo el evento con id `at`. Los eventos
    /// con id mayor no se aplican.
    fn load(&self, events: &[ItemEvent], at: u64) -> ItemProjection;

    /// Eventos que afectan a `item_id` (más los `reset` si `include_resets`),
    /// en orden de id. Con `limit` se conserva la cola: los más recientes.
    fn history(&self,
               events: &[ItemEvent],
               item_id: u64,
               include_resets: bool,
               limit: Option<usize>)
               -> Vec<ItemEvent>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryStateRepository;

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load(&self, events: &[ItemEvent], at: u64) -> ItemProjection {
        let mut state = ItemProjection::new();
        let mut applied = 0usize;
        for ev in events.iter().take_while(|e| e.id <= at) {
            state.apply(ev);
            applied += 1;
        }
        debug!("replay at={at} applied={applied} items={}", state.len());
        state
    }

    fn history(&self,
               events: &[ItemEvent],
               item_id: u64,
               include_resets: bool,
               limit: Option<usize>)
               -> Vec<ItemEvent> {
        let matched: Vec<ItemEvent> = events.iter()
                                            .filter(|e| {
                                                e.kind.item_id() == Some(item_id) || (include_resets && e.kind.is_reset())
                                            })
                                            .cloned()
                                            .collect();
        match limit {
            Some(limit) if limit < matched.len() => matched[matched.len() - limit..].to_vec(),
            _ => matched,
        }
    }
}
