//! Wire types for the cleaning backend.
//!
//! The raw response shapes live in this module; [`Preview`] is the validated
//! form handed to callers once the column arrays have been zipped into a
//! [`ColumnMap`].

use chrono::{DateTime, Utc};
use dcs_model::{ColumnMap, ColumnMapError};
use serde::{Deserialize, Serialize};

/// One entry of the previously-uploaded-files listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentUpload {
    /// Server-assigned file identifier.
    pub id: i64,
    /// Filename as originally uploaded.
    pub original_filename: String,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
}

/// Validated preview of an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Detected columns with their normalized keys, in file order.
    pub columns: ColumnMap,
    /// Total data rows in the file, when the server reports it.
    pub rows: Option<u64>,
    /// First data row, keyed by raw label, when the server reports it.
    pub sample: serde_json::Map<String, serde_json::Value>,
}

impl Preview {
    /// Sample cell for a column, rendered for display.
    pub fn sample_value(&self, raw_label: &str) -> Option<String> {
        let value = self.sample.get(raw_label)?;
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

/// Raw preview response.
///
/// The two column arrays are index-aligned; [`PreviewResponse::validate`]
/// enforces that before anything downstream can see the data.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewResponse {
    pub preview: PreviewSection,
    pub normalization: NormalizationSection,
}

/// `preview` object of the preview response.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewSection {
    /// Column labels verbatim from the file header.
    pub columns: Vec<String>,
    /// Row count, absent on older servers.
    #[serde(default)]
    pub rows: Option<u64>,
    /// First data row keyed by raw label, absent on older servers.
    #[serde(default)]
    pub sample: serde_json::Map<String, serde_json::Value>,
}

/// `normalization` object of the preview response.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationSection {
    /// Normalized keys, index-aligned with `preview.columns`.
    pub normalized: Vec<String>,
}

impl PreviewResponse {
    /// Zip the two arrays into a validated [`Preview`].
    ///
    /// # Errors
    ///
    /// Returns [`ColumnMapError`] when the arrays differ in length or carry
    /// duplicates; the preview is then treated as failed as a whole.
    pub fn validate(self) -> Result<Preview, ColumnMapError> {
        let columns =
            ColumnMap::from_columns(self.preview.columns, self.normalization.normalized)?;
        Ok(Preview {
            columns,
            rows: self.preview.rows,
            sample: self.preview.sample,
        })
    }
}

/// Body of the process request.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRequest {
    /// File to clean.
    pub file_id: i64,
    /// Normalized keys to keep, in export order.
    pub columns: Vec<String>,
    /// Whether the server should derive product image names.
    pub generate_image_names: bool,
}

/// Acknowledgement of a completed process call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessAck {
    /// Rows in the cleaned output, when the server reports it.
    #[serde(default)]
    pub rows: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_response_validates_into_column_map() {
        let json = r#"{
            "preview": {
                "columns": ["PLU", "ID MARCA"],
                "rows": 120,
                "sample": {"PLU": 1234, "ID MARCA": "ACME"}
            },
            "normalization": {"normalized": ["plu", "id_marca"]}
        }"#;

        let response: PreviewResponse = serde_json::from_str(json).unwrap();
        let preview = response.validate().unwrap();

        assert_eq!(preview.columns.len(), 2);
        assert_eq!(preview.rows, Some(120));
        assert_eq!(preview.sample_value("PLU").as_deref(), Some("1234"));
        assert_eq!(preview.sample_value("ID MARCA").as_deref(), Some("ACME"));
        assert_eq!(preview.sample_value("DESC PLU"), None);
    }

    #[test]
    fn preview_response_without_optional_fields() {
        let json = r#"{
            "preview": {"columns": ["PLU"]},
            "normalization": {"normalized": ["plu"]}
        }"#;

        let response: PreviewResponse = serde_json::from_str(json).unwrap();
        let preview = response.validate().unwrap();
        assert_eq!(preview.rows, None);
        assert!(preview.sample.is_empty());
    }

    #[test]
    fn mismatched_arrays_fail_validation() {
        let json = r#"{
            "preview": {"columns": ["PLU", "COLOR"]},
            "normalization": {"normalized": ["plu"]}
        }"#;

        let response: PreviewResponse = serde_json::from_str(json).unwrap();
        let err = response.validate().unwrap_err();
        assert_eq!(err, ColumnMapError::LengthMismatch { labels: 2, keys: 1 });
    }

    #[test]
    fn process_request_wire_shape() {
        let request = ProcessRequest {
            file_id: 7,
            columns: vec!["plu".into(), "contenido".into()],
            generate_image_names: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "file_id": 7,
                "columns": ["plu", "contenido"],
                "generate_image_names": true
            })
        );
    }

    #[test]
    fn process_ack_tolerates_bare_acknowledgements() {
        let ack: ProcessAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.rows, None);

        let ack: ProcessAck = serde_json::from_str(r#"{"rows": 42, "columns": ["plu"]}"#).unwrap();
        assert_eq!(ack.rows, Some(42));
    }

    #[test]
    fn recent_upload_listing_entry() {
        let json = r#"{
            "id": 3,
            "original_filename": "catalogo.xlsx",
            "uploaded_at": "2025-11-28T14:03:22Z"
        }"#;

        let entry: RecentUpload = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.original_filename, "catalogo.xlsx");
    }
}
