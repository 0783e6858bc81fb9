//! Workflow stages.

/// Stage of one cleaning session.
///
/// The workflow moves strictly forward (`Upload` → `Preview` → `Result`);
/// the only way back is [`Session::reset`](crate::Session::reset), which
/// returns to `Upload` from anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    /// Choosing and uploading a file. Initial stage.
    #[default]
    Upload,
    /// Reviewing detected columns and building the selection.
    Preview,
    /// Processing acknowledged; downloads available. Terminal per session.
    Result,
}

impl Stage {
    /// Short label for titles and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Preview => "Preview",
            Self::Result => "Result",
        }
    }
}
