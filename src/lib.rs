//! ItemLog
//!
//! Este crate actúa como la aplicación alrededor de `item-core`:
//! - Expone `config` para leer la configuración desde el entorno (.env).
//! - Expone `logging` para inicializar el logger del proceso.
//! - Expone `errors` para errores de arranque y de la frontera HTTP.
//! - Expone `http` con el router axum sobre un `ItemRegistry` compartido.
//!
//! Puede usarse desde `main.rs` o embebido en otros binarios/tests.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

pub use http::{build_router, SharedRegistry};
