//! Loader and cohort utilities for the v4 patient-inflammation CSV format.
//!
//! The v4 format is a plain comma-separated text file, one subject per
//! line after a single header line, laid out as
//! `id, m_1, ..., m_k, sex, age, group` where the `m_i` are per-timepoint
//! integer inflammation measurements. There is no quoting or escaping.
//!
//! ```no_run
//! use inflammation_data::{DataFolder, Result};
//!
//! fn main() -> Result<()> {
//!     let folder = DataFolder::new("data");
//!     let dataset = folder.load("inflammation-04.csv")?;
//!     for patient in &dataset {
//!         println!("{} {}", patient.id, patient.stratification_label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;

pub use data::loader::DataFolder;
pub use data::model::{Dataset, Patient};
pub use error::{DataError, Result};
