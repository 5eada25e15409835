//! Constantes del registro.
//!
//! Valores estáticos compartidos por el core y la capa HTTP. Cambiar
//! `MIN_NAME_LEN` altera qué nombres acepta el registro, pero no invalida el
//! log existente: los eventos guardan el nombre ya normalizado.

/// Longitud mínima (en caracteres, tras `trim`) de un nombre de item.
pub const MIN_NAME_LEN: usize = 3;

/// Primer identificador asignado tanto a items como a eventos.
pub const FIRST_ID: u64 = 1;

/// Mayor id de item asignable: el contador siguiente (`id + 1`) debe caber
/// en un `u64`.
pub const MAX_ITEM_ID: u64 = u64::MAX - 1;

/// Límite superior aceptado para los parámetros `limit` de paginación.
pub const MAX_PAGE_LIMIT: usize = 1000;
