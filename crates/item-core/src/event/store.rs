use chrono::Utc;
use log::debug;

use super::{ItemEvent, ItemEventKind};
use crate::constants::FIRST_ID;

/// Almacenamiento de eventos append-only.
///
/// Contrato:
/// - `append_kind` asigna el siguiente id (estrictamente creciente, nunca
///   reutilizado) y devuelve el evento completo (con id y ts).
/// - No existe API de borrado ni de mutación de eventos; `clear` sólo se usa
///   para el reset completo (log + contador de ids).
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo.
    fn append_kind(&mut self, kind: ItemEventKind) -> ItemEvent;
    /// Todos los eventos en orden ascendente por id.
    fn events(&self) -> &[ItemEvent];
    /// Vacía el log y reinicia la secuencia de ids.
    fn clear(&mut self);

    /// Eventos con id estrictamente mayor que `since` (o todos), truncados a
    /// los primeros `limit` en orden ascendente.
    fn list(&self, since: Option<u64>, limit: Option<usize>) -> Vec<ItemEvent> {
        let events = self.events();
        let start = match since {
            Some(since) => events.partition_point(|e| e.id <= since),
            None => 0,
        };
        let tail = &events[start..];
        let take = limit.unwrap_or(tail.len()).min(tail.len());
        tail[..take].to_vec()
    }

    /// Id del último evento agregado, si existe.
    fn last_id(&self) -> Option<u64> {
        self.events().last().map(|e| e.id)
    }
}

#[derive(Debug)]
pub struct InMemoryEventStore {
    events: Vec<ItemEvent>,
    next_id: u64,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self { events: Vec::new(),
               next_id: FIRST_ID }
    }
}

impl InMemoryEventStore {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, kind: ItemEventKind) -> ItemEvent {
        let id = self.next_id;
        self.next_id += 1;
        let ev = ItemEvent { id,
                             kind,
                             ts: Utc::now() };
        debug!("append_kind id={id} type={}", ev.kind.type_name());
        self.events.push(ev.clone());
        ev
    }

    fn events(&self) -> &[ItemEvent] {
        &self.events
    }

    fn clear(&mut self) {
        self.events.clear();
        self.next_id = FIRST_ID;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: u64) -> InMemoryEventStore {
        let mut store = InMemoryEventStore::default();
        for i in 1..=n {
            store.append_kind(ItemEventKind::ItemDeleted { item_id: i });
        }
        store
    }

    #[test]
    fn ids_start_at_one_and_are_contiguous() {
        let store = filled(4);
        let ids: Vec<u64> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.last_id(), Some(4));
    }

    #[test]
    fn list_since_is_exclusive() {
        let store = filled(5);
        let ids: Vec<u64> = store.list(Some(2), None).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert!(store.list(Some(5), None).is_empty());
        assert!(store.list(Some(99), None).is_empty());
        assert_eq!(store.list(Some(0), None).len(), 5);
    }

    #[test]
    fn list_limit_takes_head() {
        let store = filled(5);
        let ids: Vec<u64> = store.list(Some(1), Some(2)).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(store.list(None, Some(50)).len(), 5);
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut store = filled(3);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.last_id(), None);
        let ev = store.append_kind(ItemEventKind::Reset);
        assert_eq!(ev.id, 1);
    }
}
