use thiserror::Error;

/// Errores de arranque y de infraestructura del servidor (no de requests).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de logging: {0}")]
    Logging(String),
}
