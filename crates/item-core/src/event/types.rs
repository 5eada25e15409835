//! Tipos de evento del registro y estructura `ItemEvent`.
//!
//! Rol en el registro:
//! - Cada mutación aceptada por `ItemRegistry` emite exactamente un evento a
//!   un `EventStore` append-only.
//! - Estos eventos permiten reconstruir el estado en cualquier punto del
//!   log (replay) sin depender de la proyección mutable.
//! - El enum `ItemEventKind` define el contrato observable y estable del
//!   registro; su forma serializada usa el campo `type` en snake_case.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipos de eventos soportados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEventKind {
    /// Limpieza completa de items y del contador de ids de item. No afecta
    /// la secuencia de ids de evento.
    Reset,
    /// Alta de un item con id asignado por el registro.
    ItemCreated { item_id: u64, name: String },
    /// Escritura por id (actualización o upsert de un id inexistente).
    ItemUpdated { item_id: u64, name: String },
    /// Baja de un item vivo.
    ItemDeleted { item_id: u64 },
}

impl ItemEventKind {
    /// Item al que se refiere el evento (`None` para `Reset`).
    pub fn item_id(&self) -> Option<u64> {
        match self {
            Self::Reset => None,
            Self::ItemCreated { item_id, .. } | Self::ItemUpdated { item_id, .. } | Self::ItemDeleted { item_id } => {
                Some(*item_id)
            }
        }
    }

    /// Nombre estable de la variante (igual al campo `type` serializado).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::ItemCreated { .. } => "item_created",
            Self::ItemUpdated { .. } => "item_updated",
            Self::ItemDeleted { .. } => "item_deleted",
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEvent {
    pub id: u64, // asignado por EventStore (orden append, empieza en 1)
    #[serde(flatten)]
    pub kind: ItemEventKind,
    pub ts: DateTime<Utc>, // metadato (no participa del replay)
}
