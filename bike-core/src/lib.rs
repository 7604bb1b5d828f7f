//! Core types for the bike sharing daily usage dataset.
//!
//! - `record`: one typed row of the dataset
//! - `season`: season code to label mapping
//! - `date_range`: inclusive calendar date range
//! - `table`: the immutable, date-ordered collection of records
//! - `loader`: CSV parsing and validation into a `Table`
//! - `error`: `LoadError`

pub mod date_range;
pub mod error;
pub mod loader;
pub mod record;
pub mod season;
pub mod table;

pub use date_range::DateRange;
pub use error::LoadError;
pub use record::Record;
pub use season::Season;
pub use table::Table;
