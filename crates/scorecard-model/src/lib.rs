//! Column catalogue and cleaning options for the vehicle-loan default dataset.

pub mod columns;
pub mod error;
pub mod options;

pub use error::{OptionsError, Result};
pub use options::{CleanOptions, DurationColumn};
