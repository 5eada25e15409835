//! Item del registro.
//!
//! Un `Item` es la unidad de estado visible. Nunca se construye directamente
//! desde un request: siempre se deriva de un evento aplicado a la proyección.
use serde::{Deserialize, Serialize};

use crate::constants::MIN_NAME_LEN;
use crate::errors::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String, // siempre normalizado (trim aplicado una vez)
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id,
               name: name.into() }
    }
}

/// Recorta espacios alrededor del nombre y valida su longitud mínima.
///
/// Los espacios internos se conservan tal cual. La longitud se mide en
/// caracteres, no en bytes.
pub fn normalize_name(raw: &str) -> Result<String, RegistryError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(RegistryError::name_too_short());
    }
    Ok(trimmed.to_string())
}
