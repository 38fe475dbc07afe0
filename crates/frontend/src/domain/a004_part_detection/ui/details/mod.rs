//! Part Identification page
//!
//! - model.rs: API calls (project fetch, save, configure)
//! - view_model.rs: state, derived flags and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::PartIdentification;
pub use view_model::PartIdentificationVm;
