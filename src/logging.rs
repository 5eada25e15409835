//! Arranque del logger del proceso.
//!
//! Usa `flexi_logger` sobre la fachada `log`, escribiendo a stderr. La
//! inicialización es idempotente: la primera llamada fija el nivel y las
//! siguientes no tienen efecto. `RUST_LOG`, si está definida, tiene prioridad
//! sobre el nivel configurado.
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

use crate::errors::CoreError;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

pub fn init_logging(level: &str) -> Result<(), CoreError> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, CoreError> {
              let handle = Logger::try_with_env_or_str(level)
                  .map_err(|e| CoreError::Logging(format!("invalid log spec `{level}`: {e}")))?
                  .log_to_stderr()
                  .format(flexi_logger::detailed_format)
                  .start()
                  .map_err(|e| CoreError::Logging(format!("failed to start logger: {e}")))?;
              info!("logging initialized level={level} version={}", env!("CARGO_PKG_VERSION"));
              Ok(handle)
          })?;
    Ok(())
}
