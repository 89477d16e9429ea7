//! Session crate for the Jetflix movie search.
//!
//! This crate contains the session controller that ties the catalog, the
//! matcher and the rating source together, plus the text rendering of
//! result sets.

pub mod render;
pub mod session;

pub use session::{Command, Control, NO_HISTORY, ResultSet, SearchSession};
