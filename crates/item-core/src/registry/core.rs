//! Core ItemRegistry implementation

use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::constants::{FIRST_ID, MAX_ITEM_ID};
use crate::errors::RegistryError;
use crate::event::{EventStore, InMemoryEventStore, ItemEvent, ItemEventKind};
use crate::model::{normalize_name, Item};
use crate::projection::ItemProjection;
use crate::repo::{InMemoryStateRepository, StateRepository};

/// Resultado de una escritura por id: permite a la frontera elegir la señal
/// (p.ej. 201 vs 200).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Estado mutable protegido por el lock del registro.
#[derive(Debug)]
struct RegistryState<E: EventStore> {
    event_store: E,
    projection: ItemProjection,
    next_item_id: u64,
}

impl<E: EventStore> RegistryState<E> {
    /// Append + apply como una sola unidad (el llamador ya tiene el lock de
    /// escritura y ya validó).
    fn commit(&mut self, kind: ItemEventKind) -> ItemEvent {
        let ev = self.event_store.append_kind(kind);
        self.projection.apply(&ev);
        ev
    }
}

/// Registro de items con log de eventos y consultas "time-travel".
///
/// Todas las mutaciones serializan "validar -> append -> apply" bajo el lock
/// de escritura. Las lecturas toman el lock de lectura, por lo que un replay
/// ve un prefijo estable del log durante todo el fold.
#[derive(Debug)]
pub struct ItemRegistry<E = InMemoryEventStore, R = InMemoryStateRepository>
    where E: EventStore,
          R: StateRepository
{
    state: RwLock<RegistryState<E>>,
    repository: R,
}

impl ItemRegistry<InMemoryEventStore, InMemoryStateRepository> {
    /// Crea un registro vacío con stores en memoria.
    pub fn new() -> Self {
        Self::new_with_stores(InMemoryEventStore::default(), InMemoryStateRepository::new())
    }
}

impl Default for ItemRegistry<InMemoryEventStore, InMemoryStateRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> ItemRegistry<E, R>
    where E: EventStore,
          R: StateRepository
{
    /// Crea un registro sobre los stores proporcionados. Si el store ya
    /// contiene eventos, la proyección y el contador de ids se rehidratan
    /// desde el log.
    pub fn new_with_stores(event_store: E, repository: R) -> Self {
        let projection = match event_store.last_id() {
            Some(last) => repository.load(event_store.events(), last),
            None => ItemProjection::new(),
        };
        let next_item_id = next_item_id_after(event_store.events());
        debug!("registry init events={} items={} next_item_id={next_item_id}",
               event_store.events().len(),
               projection.len());
        Self { state: RwLock::new(RegistryState { event_store,
                                                  projection,
                                                  next_item_id }),
               repository }
    }

    /// Alta de un item. Nombres duplicados (exactos, sensibles a mayúsculas)
    /// entre items vivos se rechazan.
    pub fn create_item(&self, name: &str) -> Result<Item, RegistryError> {
        let name = normalize_name(name)?;
        let mut state = self.state.write();
        if state.projection.name_taken(&name, None) {
            warn!("create rejected: name already exists name={name:?}");
            return Err(RegistryError::name_taken());
        }
        let item_id = state.next_item_id;
        if item_id > MAX_ITEM_ID {
            warn!("create rejected: item id space exhausted next_item_id={item_id}");
            return Err(RegistryError::ids_exhausted());
        }
        state.next_item_id = item_id + 1;
        let ev = state.commit(ItemEventKind::ItemCreated { item_id,
                                                           name: name.clone() });
        debug!("item created id={item_id} event_id={}", ev.id);
        Ok(Item::new(item_id, name))
    }

    /// Lee un item del estado vivo (`at = None`) o del estado a la altura del
    /// evento `at`.
    pub fn get_item(&self, item_id: u64, at: Option<u64>) -> Result<Item, RegistryError> {
        self.resolve(at, |state| state.get(item_id).cloned())
            .ok_or(RegistryError::NotFound { item_id })
    }

    /// Lista los items en orden de primera inserción.
    pub fn list_items(&self, at: Option<u64>) -> Vec<Item> {
        self.resolve(at, ItemProjection::to_vec)
    }

    /// Baja idempotente: un id inexistente no genera evento ni error.
    pub fn delete_item(&self, item_id: u64) {
        let mut state = self.state.write();
        if !state.projection.contains(item_id) {
            debug!("delete of missing item id={item_id} ignored");
            return;
        }
        let ev = state.commit(ItemEventKind::ItemDeleted { item_id });
        debug!("item deleted id={item_id} event_id={}", ev.id);
    }

    /// Escritura por id con semántica upsert.
    ///
    /// Un id inexistente se crea con ese id y adelanta el contador de ids
    /// para que `create_item` nunca lo reasigne.
    pub fn update_item(&self, item_id: u64, name: &str) -> Result<(Item, UpsertOutcome), RegistryError> {
        if !(FIRST_ID..=MAX_ITEM_ID).contains(&item_id) {
            return Err(RegistryError::Validation(format!("Item id must be between {FIRST_ID} and {MAX_ITEM_ID}")));
        }
        let name = normalize_name(name)?;
        let mut state = self.state.write();
        if state.projection.name_taken(&name, Some(item_id)) {
            warn!("update rejected: name already exists id={item_id} name={name:?}");
            return Err(RegistryError::name_taken());
        }
        let outcome = if state.projection.contains(item_id) {
            UpsertOutcome::Updated
        } else {
            state.next_item_id = state.next_item_id.max(item_id + 1);
            UpsertOutcome::Created
        };
        let ev = state.commit(ItemEventKind::ItemUpdated { item_id,
                                                           name: name.clone() });
        debug!("item written id={item_id} outcome={outcome:?} event_id={}", ev.id);
        Ok((Item::new(item_id, name), outcome))
    }

    /// Limpia items y contador de ids. Con `keep_events` el log se conserva y
    /// se agrega un evento `reset`; sin él, el log y su secuencia se vacían.
    pub fn reset(&self, keep_events: bool) {
        let mut state = self.state.write();
        state.next_item_id = FIRST_ID;
        if keep_events {
            let ev = state.commit(ItemEventKind::Reset);
            info!("registry reset (events kept) event_id={}", ev.id);
        } else {
            state.projection.clear();
            state.event_store.clear();
            info!("registry reset (events cleared)");
        }
    }

    /// Eventos con id > `since`, como máximo `limit`, en orden ascendente.
    pub fn list_events(&self, since: Option<u64>, limit: Option<usize>) -> Vec<ItemEvent> {
        self.state.read().event_store.list(since, limit)
    }

    /// Historial de un item (ver `StateRepository::history`).
    pub fn item_history(&self, item_id: u64, include_resets: bool, limit: Option<usize>) -> Vec<ItemEvent> {
        let state = self.state.read();
        self.repository
            .history(state.event_store.events(), item_id, include_resets, limit)
    }

    /// Estado completo a la altura de `at` (o una copia del estado vivo).
    pub fn reconstruct(&self, at: Option<u64>) -> ItemProjection {
        self.resolve(at, ItemProjection::clone)
    }

    pub fn last_event_id(&self) -> Option<u64> {
        self.state.read().event_store.last_id()
    }

    fn resolve<T>(&self, at: Option<u64>, f: impl FnOnce(&ItemProjection) -> T) -> T {
        let state = self.state.read();
        match at {
            None => f(&state.projection),
            Some(at) => f(&self.repository.load(state.event_store.events(), at)),
        }
    }
}

/// Contador de ids de item implícito en un log: `reset` lo vuelve a
/// `FIRST_ID`; cada escritura lo deja en al menos `item_id + 1`.
fn next_item_id_after(events: &[ItemEvent]) -> u64 {
    events.iter().fold(FIRST_ID, |next, ev| match &ev.kind {
                     ItemEventKind::Reset => FIRST_ID,
                     ItemEventKind::ItemCreated { item_id, .. } | ItemEventKind::ItemUpdated { item_id, .. } => {
                         next.max(item_id.saturating_add(1))
                     }
                     ItemEventKind::ItemDeleted { .. } => next,
                 })
}
