//! Errores específicos del registro.
//!
//! Todos los errores son recuperables y acotados a una sola operación: el
//! core nunca deja el log ni la proyección a medio aplicar.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    /// El nombre (tras `trim`) es demasiado corto u otro dato de entrada es inválido.
    #[error("{0}")]
    Validation(String),
    /// El nombre ya pertenece a otro item vivo, o no quedan ids de item.
    #[error("{0}")]
    Conflict(String),
    /// El item no existe en el estado consultado.
    #[error("Item not found")]
    NotFound { item_id: u64 },
}

/// Clasificación gruesa del error para que la frontera elija su señal
/// (p.ej. 422 / 409 / 404) sin comparar mensajes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Conflict,
    NotFound,
}

impl RegistryError {
    pub fn name_too_short() -> Self {
        Self::Validation(format!("Name must be at least {} characters long",
                                 crate::constants::MIN_NAME_LEN))
    }

    pub fn name_taken() -> Self {
        Self::Conflict("Name already exists".into())
    }

    pub fn ids_exhausted() -> Self {
        Self::Conflict("Item id space exhausted".into())
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) => ErrorClass::Validation,
            Self::Conflict(_) => ErrorClass::Conflict,
            Self::NotFound { .. } => ErrorClass::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(RegistryError::name_too_short().to_string(),
                   "Name must be at least 3 characters long");
        assert_eq!(RegistryError::name_taken().to_string(), "Name already exists");
        assert_eq!(RegistryError::NotFound { item_id: 9 }.to_string(), "Item not found");
    }

    #[test]
    fn class_follows_variant() {
        assert_eq!(RegistryError::name_too_short().class(), ErrorClass::Validation);
        assert_eq!(RegistryError::name_taken().class(), ErrorClass::Conflict);
        assert_eq!(RegistryError::ids_exhausted().class(), ErrorClass::Conflict);
        assert_eq!(RegistryError::NotFound { item_id: 1 }.class(), ErrorClass::NotFound);
    }
}
