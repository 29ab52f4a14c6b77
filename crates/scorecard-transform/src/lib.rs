//! Loan-default data transformation.
//!
//! This crate provides the cleaning pipeline that prepares the raw loan
//! dataset for credit-scorecard modeling:
//!
//! - **pipeline**: the ordered cleaning steps and [`clean`]
//! - **frame**: column lookup, ordering, renaming, coercion and dropping
//! - **mask**: boolean row masks and mask-driven assignment
//! - **datetime**: `dd-mm-yy` parsing, century correction, age and recency
//! - **duration**: `"<n>yrs <m>mon"` strings to month counts

pub mod datetime;
pub mod duration;
pub mod error;
pub mod frame;
pub mod mask;
pub mod pipeline;

pub use error::{CleanError, Result};
pub use pipeline::{CleanPipeline, CleanReport, CleanStep, StepReport, clean};
