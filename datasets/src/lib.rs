//! `elbow-datasets` provides the inputs of elbow method sweeps: tables loaded from CSV files
//! and synthetic blobs for tests, benchmarks and demos.
//!
//! ## Loading a table
//!
//! The first row of the file names the columns, every further row is one sample:
//! ```ignore
//! let table = elbow_datasets::load_csv("customers.csv.gz")?;
//! assert_eq!(table.feature_names()[0], "age");
//! ```
//!
//! Files ending in `.gz` are decompressed on the fly.

mod dataset;
pub mod generate;

pub use dataset::*;
