//! item-core: registro de items con log de eventos append-only
//!
//! - `event`: eventos inmutables y `EventStore` (ids estrictamente crecientes).
//! - `projection`: estado vivo derivado del log, actualizado por evento.
//! - `repo`: replay del log hasta un evento dado e historial por item.
//! - `registry`: `ItemRegistry`, que valida, emite eventos y responde
//!   consultas vivas o históricas.
pub mod constants;
pub mod errors;
pub mod event;
pub mod model;
pub mod projection;
pub mod registry;
pub mod repo;

pub use errors::{ErrorClass, RegistryError};
pub use event::{EventStore, InMemoryEventStore, ItemEvent, ItemEventKind};
pub use model::Item;
pub use projection::ItemProjection;
pub use registry::{ItemRegistry, UpsertOutcome};
pub use repo::{InMemoryStateRepository, StateRepository};
