//! Reading edge lists and writing path reports.

pub mod loader;
pub mod report;

pub use loader::{load_all, load_csv, Columns, LoadError, LoadOptions};
pub use report::{PathBlock, WriteError};
