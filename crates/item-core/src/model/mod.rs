//! Modelos del registro (Item y normalización de nombres).

pub mod item;

pub use item::{normalize_name, Item};
