//! Required-column gate for product image-name generation.
//!
//! The server can derive a `.psd` image filename for every cleaned row, but
//! only when the four identifying columns are part of the export. The gate
//! is a pure derivation over the current selection; it owns no state.

use crate::columns::ColumnMap;
use crate::selection::Selection;

/// Columns that must be selected before image names can be generated.
///
/// These are raw labels, matched before normalization.
pub const REQUIRED_COLUMNS: [&str; 4] = ["PLU", "ID MARCA", "DESC PLU", "CONTENIDO"];

/// Filename pattern the server uses when name generation is enabled.
pub const IMAGE_NAME_TEMPLATE: &str = "{PLU}_{ID MARCA}_{DESC PLU}_{CONTENIDO}.psd";

/// True when every required column is in the selection.
///
/// Each required raw label is resolved through the column map first, since
/// the selection stores normalized keys.
pub fn can_generate_names(columns: &ColumnMap, selection: &Selection) -> bool {
    missing_columns(columns, selection).is_empty()
}

/// Required columns the user still has to select, as raw labels for
/// user-facing messaging.
pub fn missing_columns(columns: &ColumnMap, selection: &Selection) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|label| !selection.contains(columns.resolve(label).key()))
        .collect()
}
