//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`AppConfig`) con las secciones de servidor y logging.
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Dirección de escucha del servidor HTTP.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Especificación de nivel para el logger (p.ej. `info`, `debug,item_core=trace`).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    /// Lee `ITEMLOG_HOST`, `ITEMLOG_PORT` y `ITEMLOG_LOG` (con defaults).
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let host = lookup("ITEMLOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("ITEMLOG_PORT") {
            Some(raw) => raw.trim()
                            .parse::<u16>()
                            .map_err(|e| CoreError::Config(format!("ITEMLOG_PORT={raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let level = lookup("ITEMLOG_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        Ok(Self { server: ServerConfig { host, port },
                  logging: LoggingConfig { level } })
    }
}
