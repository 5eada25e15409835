//! Registry module for ItemRegistry implementation
//!
//! Orquesta create/read/update/delete sobre el log de eventos y la
//! proyección viva, y expone las consultas históricas.

pub mod core;

pub use core::{ItemRegistry, UpsertOutcome};

pub use crate::event::{EventStore, InMemoryEventStore, ItemEvent, ItemEventKind};
pub use crate::repo::{InMemoryStateRepository, StateRepository};
