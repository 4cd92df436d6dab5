//! Local page state for portfolio front ends.
//!
//! Nothing here renders; each type owns the state a page keeps between user
//! interactions and exposes the transitions the page drives.

pub mod catalog_view;
pub mod contact_form;
pub mod detail_view;
pub mod header;

pub use catalog_view::CatalogViewState;
pub use contact_form::{ContactFormState, SubmitStatus};
pub use detail_view::ProjectDetailState;
pub use header::{HeaderController, HeaderState, HeaderVisibility, ScrollSignal};
