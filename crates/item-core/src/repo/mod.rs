pub mod types;
pub use types::{InMemoryStateRepository, StateRepository};
