//! Domain model for Data Cleaner Studio.
//!
//! This crate holds the pure data structures of the cleaning workflow:
//!
//! - [`UploadedFile`] - identity of a file stored on the server
//! - [`ColumnMap`] - bidirectional lookup between raw column labels and
//!   server-normalized keys for one uploaded file
//! - [`Selection`] - the ordered, deduplicated set of chosen column keys
//! - [`gate`] - the required-column gate for image-name generation
//! - [`Variant`] - the CSV delimiter flavor requested at download time
//!
//! Everything here is synchronous and side-effect free; network and session
//! concerns live in `dcs-api` and `dcs-session`.

pub mod columns;
pub mod file;
pub mod gate;
pub mod selection;
pub mod variant;

pub use columns::{ColumnMap, ColumnMapError, ColumnPair, Resolution};
pub use file::UploadedFile;
pub use gate::{IMAGE_NAME_TEMPLATE, REQUIRED_COLUMNS, can_generate_names, missing_columns};
pub use selection::{Selection, SelectionError};
pub use variant::Variant;
