//! CSV delimiter variants offered at download time.

use serde::{Deserialize, Serialize};

/// Delimiter flavor of the exported CSV.
///
/// This is a request parameter only; it is never stored in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Semicolon-separated output.
    Semicolon,
    /// Comma-separated output.
    Comma,
}

impl Variant {
    /// All variants, in the order they are offered in the UI.
    pub const ALL: [Variant; 2] = [Variant::Semicolon, Variant::Comma];

    /// Wire encoding used in the download query string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semicolon => "semicolon",
            Self::Comma => "comma",
        }
    }

    /// The delimiter character itself, for display.
    pub fn delimiter(self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Comma => ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_matches_serde() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }
}
