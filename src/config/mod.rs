//! Configuration — schema and loading.

pub mod loader;
pub mod schema;

pub use loader::{ENV_MAX_DEPTH, ENV_STRATEGY, ENV_UNDIRECTED};
pub use schema::{BuildConfig, GraphwalkConfig, SearchConfig, Strategy};
