//! Column pairs and the raw-label / normalized-key lookup.
//!
//! The preview operation returns two index-aligned arrays: the column labels
//! exactly as they appear in the uploaded file, and the canonical keys the
//! server computed for them. [`ColumnMap`] zips the two into [`ColumnPair`]s
//! and offers lookup in both directions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One detected column: the label shown to the user and the key the server
/// expects in process/export requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPair {
    /// Column name verbatim from the source file header.
    pub raw_label: String,
    /// Canonical identifier computed server-side.
    pub normalized_key: String,
}

/// Failure to assemble a [`ColumnMap`] from a preview response.
///
/// Any of these means the ingestion data is inconsistent; callers must treat
/// the whole preview as failed rather than build a partial mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnMapError {
    /// The two preview arrays differ in length.
    #[error("preview returned {labels} column label(s) but {keys} normalized key(s)")]
    LengthMismatch {
        /// Number of raw labels received.
        labels: usize,
        /// Number of normalized keys received.
        keys: usize,
    },

    /// The same raw label appeared twice.
    #[error("duplicate column label: {0}")]
    DuplicateLabel(String),

    /// The same normalized key appeared twice.
    #[error("duplicate normalized key: {0}")]
    DuplicateKey(String),
}

/// Outcome of resolving a raw label to its normalized key.
///
/// A label that is missing from the map resolves to itself. The fallback is
/// deliberate (a stale UI state must still produce a usable process payload)
/// but callers and tests can tell the two paths apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The label was found; carries the normalized key.
    Mapped(String),
    /// The label was not in the map; carries the label itself.
    Fallback(String),
}

impl Resolution {
    /// The key to put in a server payload, whichever path produced it.
    pub fn key(&self) -> &str {
        match self {
            Self::Mapped(key) | Self::Fallback(key) => key,
        }
    }

    /// Consume the resolution, returning the payload key.
    pub fn into_key(self) -> String {
        match self {
            Self::Mapped(key) | Self::Fallback(key) => key,
        }
    }

    /// True when the identity fallback was taken.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Bidirectional lookup between raw labels and normalized keys for one
/// uploaded file, in preview order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pairs: Vec<ColumnPair>,
}

impl ColumnMap {
    /// Build the map from the two index-aligned preview arrays.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnMapError`] when the arrays differ in length or either
    /// side contains duplicates. No partial map is ever produced.
    pub fn from_columns(
        labels: Vec<String>,
        keys: Vec<String>,
    ) -> Result<Self, ColumnMapError> {
        if labels.len() != keys.len() {
            return Err(ColumnMapError::LengthMismatch {
                labels: labels.len(),
                keys: keys.len(),
            });
        }

        let mut pairs: Vec<ColumnPair> = Vec::with_capacity(labels.len());
        for (raw_label, normalized_key) in labels.into_iter().zip(keys) {
            if pairs.iter().any(|p| p.raw_label == raw_label) {
                return Err(ColumnMapError::DuplicateLabel(raw_label));
            }
            if pairs.iter().any(|p| p.normalized_key == normalized_key) {
                return Err(ColumnMapError::DuplicateKey(normalized_key));
            }
            pairs.push(ColumnPair {
                raw_label,
                normalized_key,
            });
        }

        Ok(Self { pairs })
    }

    /// All pairs in preview order.
    pub fn pairs(&self) -> &[ColumnPair] {
        &self.pairs
    }

    /// Number of detected columns.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no columns were detected.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Raw labels in preview order.
    pub fn raw_labels(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.raw_label.as_str())
    }

    /// Resolve a raw label to the key the server expects.
    pub fn resolve(&self, raw_label: &str) -> Resolution {
        match self.pairs.iter().find(|p| p.raw_label == raw_label) {
            Some(pair) => Resolution::Mapped(pair.normalized_key.clone()),
            None => Resolution::Fallback(raw_label.to_string()),
        }
    }

    /// Reverse lookup: the raw label behind a normalized key.
    pub fn raw_for_key(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.normalized_key == key)
            .map(|p| p.raw_label.as_str())
    }

    /// True when the key belongs to a detected column.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|p| p.normalized_key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ColumnMap {
        ColumnMap::from_columns(
            vec![
                "PLU".into(),
                "COLOR".into(),
                "ID MARCA".into(),
                "DESC PLU".into(),
                "CONTENIDO".into(),
            ],
            vec![
                "plu".into(),
                "color".into(),
                "id_marca".into(),
                "desc_plu".into(),
                "contenido".into(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn resolve_follows_preview_index() {
        let map = sample_map();
        for pair in map.pairs() {
            assert_eq!(
                map.resolve(&pair.raw_label),
                Resolution::Mapped(pair.normalized_key.clone())
            );
        }
    }

    #[test]
    fn resolve_falls_back_to_raw_label() {
        let map = sample_map();
        let resolution = map.resolve("EAN");
        assert!(resolution.is_fallback());
        assert_eq!(resolution.key(), "EAN");
    }

    #[test]
    fn reverse_lookup() {
        let map = sample_map();
        assert_eq!(map.raw_for_key("id_marca"), Some("ID MARCA"));
        assert_eq!(map.raw_for_key("missing"), None);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = ColumnMap::from_columns(
            vec!["PLU".into(), "COLOR".into()],
            vec!["plu".into()],
        )
        .unwrap_err();
        assert_eq!(err, ColumnMapError::LengthMismatch { labels: 2, keys: 1 });
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = ColumnMap::from_columns(
            vec!["PLU".into(), "PLU".into()],
            vec!["plu".into(), "plu_2".into()],
        )
        .unwrap_err();
        assert_eq!(err, ColumnMapError::DuplicateLabel("PLU".into()));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = ColumnMap::from_columns(
            vec!["PLU".into(), "Plu".into()],
            vec!["plu".into(), "plu".into()],
        )
        .unwrap_err();
        assert_eq!(err, ColumnMapError::DuplicateKey("plu".into()));
    }
}
