pub mod catalog;

pub use catalog::{AppState, Catalog, Record, Table};
