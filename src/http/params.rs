//! Parámetros de query y su validación de rangos.
//!
//! Los valores llegan como enteros con signo para poder rechazar negativos
//! con un mensaje de rango propio; lo que ni siquiera es un entero lo
//! rechaza el extractor (`ApiError::Malformed`).
use item_core::constants::MAX_PAGE_LIMIT;
use serde::Deserialize;

use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct AtParams {
    pub at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    pub since: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub include_resets: bool,
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResetParams {
    #[serde(default)]
    pub keep_events: bool,
}

/// `since`/`at`: deben ser >= 0.
pub fn event_cursor(param: &'static str, value: Option<i64>) -> Result<Option<u64>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) => u64::try_from(v).map(Some)
                                   .map_err(|_| ApiError::InvalidQuery { param,
                                                                        msg: "must be greater than or equal to 0".into() }),
    }
}

/// `limit`: debe estar en [1, MAX_PAGE_LIMIT].
pub fn page_limit(value: Option<i64>) -> Result<Option<usize>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) if v < 1 => Err(ApiError::InvalidQuery { param: "limit",
                                                         msg: "must be greater than or equal to 1".into() }),
        Some(v) => match usize::try_from(v) {
            Ok(v) if v <= MAX_PAGE_LIMIT => Ok(Some(v)),
            _ => Err(ApiError::InvalidQuery { param: "limit",
                                              msg: format!("must be less than or equal to {MAX_PAGE_LIMIT}") }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_accepts_zero_and_rejects_negative() {
        assert_eq!(event_cursor("at", None).unwrap(), None);
        assert_eq!(event_cursor("at", Some(0)).unwrap(), Some(0));
        assert!(matches!(event_cursor("since", Some(-1)),
                         Err(ApiError::InvalidQuery { param: "since", .. })));
    }

    #[test]
    fn limit_bounds() {
        assert_eq!(page_limit(Some(1)).unwrap(), Some(1));
        assert_eq!(page_limit(Some(1000)).unwrap(), Some(1000));
        assert!(page_limit(Some(0)).is_err());
        assert!(page_limit(Some(1001)).is_err());
        assert!(page_limit(Some(-5)).is_err());
    }
}
