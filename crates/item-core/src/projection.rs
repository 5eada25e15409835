//! Proyección de estado actual (item id -> Item).
//!
//! La proyección es una caché materializada del fold del log: sólo cambia
//! vía `apply`, nunca por escritura directa desde un handler. El mismo
//! `apply` se usa para el estado vivo y para el replay, de modo que ambos
//! producen el mismo contenido y el mismo orden.
//!
//! Orden de iteración: orden de primera inserción. Una actualización
//! sobrescribe en su lugar; un borrado elimina el hueco conservando el orden
//! del resto; recrear un id borrado lo coloca al final.
use indexmap::IndexMap;

use crate::event::{ItemEvent, ItemEventKind};
use crate::model::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemProjection {
    items: IndexMap<u64, Item>,
}

impl ItemProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aplica exactamente un evento.
    pub fn apply(&mut self, event: &ItemEvent) {
        match &event.kind {
            ItemEventKind::Reset => self.items.clear(),
            ItemEventKind::ItemCreated { item_id, name } | ItemEventKind::ItemUpdated { item_id, name } => {
                self.items.insert(*item_id, Item::new(*item_id, name.clone()));
            }
            ItemEventKind::ItemDeleted { item_id } => {
                self.items.shift_remove(item_id);
            }
        }
    }

    pub fn get(&self, item_id: u64) -> Option<&Item> {
        self.items.get(&item_id)
    }

    pub fn contains(&self, item_id: u64) -> bool {
        self.items.contains_key(&item_id)
    }

    /// `true` si algún item vivo distinto de `except` usa exactamente `name`.
    pub fn name_taken(&self, name: &str, except: Option<u64>) -> bool {
        self.items
            .values()
            .any(|item| item.name == name && Some(item.id) != except)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn to_vec(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
